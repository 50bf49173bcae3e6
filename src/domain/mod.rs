// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic, free of I/O.
//!
//! This module contains pure domain types, value objects, and business rules.
//! Apart from `std` it only uses the `thiserror` derive, so it can be tested
//! without any runtime.
//!
//! # Modules
//!
//! - [`gallery`]: Photo types ([`PhotoDescriptor`](gallery::PhotoDescriptor),
//!   [`PhotoRecord`](gallery::PhotoRecord), [`Equipment`](gallery::Equipment),
//!   [`CategoryFilter`](gallery::CategoryFilter))
//! - [`profile`]: Static profile content ([`Profile`](profile::Profile),
//!   [`ProfileSection`](profile::ProfileSection))

pub mod gallery;
pub mod profile;
