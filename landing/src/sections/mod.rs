// Landing page sections

mod hero;

pub use hero::HeroSection;
