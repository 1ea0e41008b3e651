//! Contact-form forwarding into the CRM.
//!
//! Verifies the submitted CAPTCHA token, then relays the submission to
//! Pipedrive as a person plus a deal, with the free-text message attached as
//! a note.

mod captcha;
mod forwarder;
mod pipedrive;

pub use captcha::{CaptchaVerifier, RecaptchaVerifier};
pub use forwarder::{ContactForwarder, ContactOutcome, ContactSubmission};
pub use pipedrive::{CrmGateway, CrmRecord, PipedriveClient};
