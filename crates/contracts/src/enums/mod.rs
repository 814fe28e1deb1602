pub mod alcohol_content;

pub use alcohol_content::AlcoholContent;
