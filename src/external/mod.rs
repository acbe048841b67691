pub mod fcm;

pub use fcm::FcmService;
