pub mod buttons;
pub mod modal;
pub mod scroll_reveal;
pub mod section;
pub mod team_carousel;
pub mod testimonial_carousel;
pub mod video_carousel;
