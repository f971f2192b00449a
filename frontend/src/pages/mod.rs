pub mod analytics;
pub mod complaint_details;
pub mod complaints;
pub mod home;
