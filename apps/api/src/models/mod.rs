pub mod optimization;
