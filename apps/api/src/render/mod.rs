// Report rendering and delivery: HTML email for HR plus the mail transport.

pub mod email;
pub mod mailer;
