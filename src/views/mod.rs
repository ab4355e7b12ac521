pub mod booking;
pub mod chat;
pub mod header;
pub mod sections;
pub mod shared;

pub use booking::BookingForm;
pub use chat::{ChatPanel, ChatVariant, ChatWidget, WidgetVisibility};
pub use header::SiteHeader;
pub use sections::{
    AboutSection, ChatSection, ConsultingSection, ContactSection, ProjectsSection, SiteFooter,
};
pub use shared::Reveal;
