// src/specs/mod.rs
//! # Page reading
//!
//! Each spec knows where the ground truth lives in one remote page and how to
//! pull it out. Specs fetch and extract; they do not enrich, format or deliver.
//!
//! ## Current specs
//! - `calendar` – the vendor schedule embedded in a StreetFoodFinder page as a
//!   `sff.v.vendor_locations = [...]` script assignment.
//!
//! ## Conventions
//! - Only look inside `<script>` blocks; the same text elsewhere is not code.
//! - A page with no calendar is `FinderError::CalendarNotFound`, never an empty list.
//! - Specs should be testable offline against captured page text.
pub mod calendar;
