pub mod auspice;
pub mod cli;
pub mod commands;
pub mod export;
pub mod lineage;
