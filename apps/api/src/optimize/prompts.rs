// Prompt fragments for the optimization call, in the order they are sent.
// The system instruction lives in llm_client::prompts.

pub const PREAMBLE: &str = "You are an expert resume writer and career coach.\n";

pub const RESUME_HEADER: &str = "Here is the user's current resume:\n";

pub const JOB_HEADER: &str = "They are applying for the following job description:\n";

pub const GENERIC_ROLE: &str = "They are applying for a general role. \
    Please improve the resume for a generic professional position.\n\n";

pub const REWRITE_INSTRUCTIONS: &str = "Rewrite the resume to better fit the role, \
    using action verbs, quantifying achievements, and integrating keywords from the job posting \
    where appropriate. Do not fabricate experiences or degrees.\n";

pub const COVER_LETTER_INSTRUCTIONS: &str =
    "Then draft a one-page cover letter based on the improved resume.\n";

/// Tone and style are inserted verbatim.
pub fn tone_and_style(tone: &str, style: &str) -> String {
    format!("Use a {tone} tone and a {style} style.\n\n")
}

pub const JSON_FORMAT_DIRECTIVE: &str = "Respond with JSON only in the following format:\n\
    {\"resume\": \"<improved resume text>\", \"coverLetter\": \"<cover letter text>\"}";
