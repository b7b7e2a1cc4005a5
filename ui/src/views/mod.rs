mod hero;
pub use hero::Hero;

mod landing;
pub use landing::LandingPage;

mod services;
pub use services::Services;

mod showcase;
pub use showcase::Showcase;

mod vision;
pub use vision::Vision;
