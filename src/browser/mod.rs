//! Browser automation module
//!
//! Headless browser control through ChromiumOxide: session lifecycle,
//! navigation, readiness waiting and markup capture. These are the steps the
//! rendered fetch composes under a single deadline.

pub mod capture;
pub mod controller;
pub mod navigation;

pub use capture::PageCapture;
pub use controller::{BrowserConfig, BrowserSession};
pub use navigation::PageNavigator;
