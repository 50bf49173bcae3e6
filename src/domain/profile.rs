// SPDX-License-Identifier: MPL-2.0
//! Profile domain types.
//!
//! All profile content is static and borrowed for the lifetime of the
//! program, so every field is a `&'static str`.

/// Identity and contact details shown in the hero block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    /// Locator of the downloadable CV.
    pub cv: &'static str,
    pub short_bio: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub role: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Publication {
    pub title: &'static str,
    pub venue: &'static str,
    pub year: &'static str,
    pub link: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    pub title: &'static str,
    pub event: &'static str,
    pub date: &'static str,
    pub location: &'static str,
    pub link: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Certification {
    pub title: &'static str,
    pub issuer: &'static str,
    pub issued: &'static str,
    pub expires: &'static str,
    pub link: &'static str,
    /// Short glyph shown next to the title.
    pub badge: &'static str,
}

/// A camera or lens listed in the photography equipment panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GearItem {
    pub name: &'static str,
    pub note: &'static str,
}

/// Section of the profile screen selected from the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProfileSection {
    /// Hero followed by every section.
    #[default]
    About,
    Experience,
    Education,
    Projects,
    Publications,
    Presentations,
    Certifications,
}

impl ProfileSection {
    /// Navbar order.
    pub const ALL: [ProfileSection; 7] = [
        ProfileSection::About,
        ProfileSection::Experience,
        ProfileSection::Education,
        ProfileSection::Projects,
        ProfileSection::Publications,
        ProfileSection::Presentations,
        ProfileSection::Certifications,
    ];

    /// Sections rendered below the hero, in page order.
    pub const CONTENT: [ProfileSection; 6] = [
        ProfileSection::Experience,
        ProfileSection::Education,
        ProfileSection::Certifications,
        ProfileSection::Projects,
        ProfileSection::Publications,
        ProfileSection::Presentations,
    ];

    /// Returns `true` if `section` is rendered when `self` is selected.
    #[must_use]
    pub fn shows(self, section: ProfileSection) -> bool {
        self == ProfileSection::About || self == section
    }

    /// Localization key of the section label.
    #[must_use]
    pub const fn i18n_key(self) -> &'static str {
        match self {
            ProfileSection::About => "section-about",
            ProfileSection::Experience => "section-experience",
            ProfileSection::Education => "section-education",
            ProfileSection::Projects => "section-projects",
            ProfileSection::Publications => "section-publications",
            ProfileSection::Presentations => "section-presentations",
            ProfileSection::Certifications => "section-certifications",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn about_shows_every_content_section() {
        for section in ProfileSection::CONTENT {
            assert!(ProfileSection::About.shows(section));
        }
    }

    #[test]
    fn single_section_shows_only_itself() {
        assert!(ProfileSection::Projects.shows(ProfileSection::Projects));
        assert!(!ProfileSection::Projects.shows(ProfileSection::Education));
    }

    #[test]
    fn i18n_keys_are_distinct() {
        let mut keys: Vec<_> = ProfileSection::ALL.iter().map(|s| s.i18n_key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), ProfileSection::ALL.len());
    }
}
