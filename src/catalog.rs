// SPDX-License-Identifier: MPL-2.0
//! Build-time content: the profile, its sections, and the photo catalog.

use crate::domain::gallery::{Category, PhotoDescriptor};
use crate::domain::profile::{
    Certification, Education, Experience, GearItem, Presentation, Profile, Project, Publication,
};

pub const PROFILE: Profile = Profile {
    name: "Nikolaos Fanourakis",
    title: "Data Scientist, PhD",
    location: "Heraklion, Crete, Greece",
    email: "nfanourakis@sataliadata.com",
    github: "https://github.com/nikolaosfanourakis",
    linkedin: "https://linkedin.com/in/nikolaosfanourakis",
    cv: "/Fanourakis_CV.pdf",
    short_bio: "Data Scientist with a PhD in Computer Science specializing in machine learning, \
knowledge graphs, embeddings and entity alignment. Currently working at SATALIA, developing \
innovative AI solutions for real-world challenges. Passionate about research, ML, and software \
engineering.",
};

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        role: "Data Scientist",
        organization: "SATALIA",
        period: "2025 — Present",
        description: "Developing machine learning solutions and AI applications for data-driven \
insights. Working on computer vision, predictive modeling, and advanced analytics projects.",
    },
    Experience {
        role: "PhD Researcher",
        organization: "Technical University of Crete",
        period: "2018 — 2024",
        description: "Conducted advanced research in computer science with focus on machine \
learning, computer vision, and biomedical applications. Published research in peer-reviewed \
journals and conferences.",
    },
    Experience {
        role: "Research Assistant",
        organization: "Various Research Projects",
        period: "2016 — 2018",
        description: "Contributed to multiple research initiatives in machine learning and data \
analysis, developing expertise in algorithm implementation and experimental design.",
    },
];

pub const EDUCATION: &[Education] = &[
    Education {
        degree: "Ph.D. in Computer Science",
        institution: "Technical University of Crete",
        period: "2018 — 2024",
    },
    Education {
        degree: "M.Sc. in Computer Science",
        institution: "Technical University of Crete",
        period: "2016 — 2018",
    },
    Education {
        degree: "B.Sc. in Applied Mathematics",
        institution: "University of Crete",
        period: "2012 — 2016",
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Computer Vision for Biomedical Applications",
        description: "Developed advanced machine learning models for medical image analysis and \
diagnostic support systems during PhD research.",
    },
    Project {
        title: "Machine Learning Pipeline at SATALIA",
        description: "Built end-to-end ML solutions for data analytics and predictive modeling, \
implementing scalable algorithms for business intelligence.",
    },
    Project {
        title: "Research Publications & Open Source",
        description: "Contributed to academic research with published papers in computer science \
conferences and journals, sharing methodologies and findings.",
    },
    Project {
        title: "Data Science Consulting",
        description: "Applied statistical analysis and machine learning techniques to solve \
real-world problems across various domains and industries.",
    },
];

pub const PUBLICATIONS: &[Publication] = &[
    Publication {
        title: "Machine Learning Approaches for Biomedical Image Analysis",
        venue: "Computer Vision Conference",
        year: "2023",
        link: "#",
    },
    Publication {
        title: "Advanced Algorithms for Medical Diagnostic Systems",
        venue: "Journal of Biomedical Computing",
        year: "2022",
        link: "#",
    },
    Publication {
        title: "Deep Learning Applications in Healthcare",
        venue: "International AI Conference",
        year: "2021",
        link: "#",
    },
    Publication {
        title: "Statistical Methods for Complex Data Analysis",
        venue: "Applied Mathematics Journal",
        year: "2020",
        link: "#",
    },
];

pub const PRESENTATIONS: &[Presentation] = &[
    Presentation {
        title: "AI Solutions for Business Intelligence",
        event: "SATALIA Tech Talk",
        date: "September 2024",
        location: "Heraklion, Greece",
        link: "#",
    },
    Presentation {
        title: "PhD Defense: Computer Vision Applications",
        event: "Technical University of Crete",
        date: "June 2024",
        location: "Chania, Greece",
        link: "#",
    },
    Presentation {
        title: "Machine Learning for Medical Applications",
        event: "Greek Computer Science Conference",
        date: "October 2023",
        location: "Athens, Greece",
        link: "#",
    },
    Presentation {
        title: "Research Methodologies in AI",
        event: "Graduate Student Symposium",
        date: "May 2022",
        location: "Technical University of Crete",
        link: "#",
    },
];

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        title: "PhD in Computer Science",
        issuer: "Technical University of Crete",
        issued: "2024",
        expires: "Never",
        link: "#",
        badge: "🎓",
    },
    Certification {
        title: "Python for Data Science Specialization",
        issuer: "Coursera",
        issued: "2023",
        expires: "Never",
        link: "#",
        badge: "🐍",
    },
    Certification {
        title: "Machine Learning Certification",
        issuer: "Stanford Online",
        issued: "2022",
        expires: "Never",
        link: "#",
        badge: "🤖",
    },
    Certification {
        title: "Deep Learning Specialization",
        issuer: "deeplearning.ai",
        issued: "2021",
        expires: "Never",
        link: "#",
        badge: "🧠",
    },
];

pub const CAMERAS: &[GearItem] = &[
    GearItem {
        name: "Nikon Z50 II",
        note: "APS-C Mirrorless",
    },
    GearItem {
        name: "iPhone 13 Pro",
        note: "Mobile Photography",
    },
];

pub const LENSES: &[GearItem] = &[
    GearItem {
        name: "NIKKOR Z 16-50mm f/3.5-6.3",
        note: "Everyday-use",
    },
    GearItem {
        name: "Viltrox 56mm f/1.7",
        note: "Portrait lens",
    },
];

/// Photo descriptors in display order.
#[must_use]
pub fn photo_descriptors() -> Vec<PhotoDescriptor> {
    vec![
        PhotoDescriptor::new(1, "/photos/DSC_0085.jpg", "Graffiti Building", Category::Street),
        PhotoDescriptor::new(2, "/photos/DSC_0102.jpg", "Stubbles", Category::Nature),
        PhotoDescriptor::new(3, "/photos/DSC_0114.jpg", "Skateboard Platform", Category::Street),
    ]
}
