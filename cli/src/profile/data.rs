//! # Portfolio Content
//!
//! File: cli/src/profile/data.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The static content behind `folio profile`: the owner's details, the skills
//! grid, the project gallery and the social links. Exposed through the
//! accessor functions re-exported from `profile`.
//!
use super::{Owner, Project, ProjectCategory, SkillCategory, SocialLink};

static OWNER: Owner = Owner {
    name: "Nisal Perera",
    initials: "NP",
    role: "Full Stack Developer",
    about: "I'm an innovative and detail-driven full-stack developer with 6 months of hands-on experience crafting scalable, user-focused web applications. I thrive on solving real-world problems through clean code, modern technologies, and collaborative development. Passionate about continuous learning and digital innovation, I aim to build products that not only perform, but truly connect with users.",
    experience: "Sri Lanka - 06 Months",
    education: "Software Engineering",
};

static SKILL_CATEGORIES: [SkillCategory; 5] = [
    SkillCategory {
        title: "Frontend Development",
        skills: &[
            "HTML5", "CSS3", "JavaScript", "React", "React Native", "Next.js", "Tailwind CSS",
            "Bootstrap", "Figma",
        ],
    },
    SkillCategory {
        title: "Backend Development",
        skills: &[
            "Node.js", "Express.js", "PHP", "Java", "C#", "Python", "Spring Boot", ".NET",
        ],
    },
    SkillCategory {
        title: "Databases & APIs",
        skills: &[
            "MySQL", "MSSQL", "SQLite", "MongoDB", "Firebase", "REST APIs", "Postman",
        ],
    },
    SkillCategory {
        title: "Tools & Technologies",
        skills: &[
            "Git", "GitHub", "VS Code", "Visual Studio", "Docker", "Ubuntu", "Arduino", "WordPress",
        ],
    },
    SkillCategory {
        title: "Cloud & Platforms",
        skills: &[
            "Google Cloud", "AWS", "Microsoft Azure", "DigitalOcean", "Google Colab", "Roboflow",
            "Kaggle",
        ],
    },
];

static PROJECTS: [Project; 15] = [
    Project {
        id: 1,
        title: "Sri Lanka Railway Train Location Tracker",
        description: "Real-time train tracking system for Sri Lankan railways with location updates, schedule management, and passenger information using microservices architecture.",
        category: ProjectCategory::WebApp,
        tags: &["React", "Node.js", "Express.js", "MySQL", "MongoDB", "JWT", "Microservices", "Digital Ocean", "REST API"],
        repository: Some("https://github.com/NisalMadura/SriLanka-Railway-Tracking-API.git"),
        live: None,
        design: None,
    },
    Project {
        id: 2,
        title: "Aqua Swimming Academy",
        description: "Professional swimming academy website with course information, instructor profiles, registration system, and student management features.",
        category: ProjectCategory::Website,
        tags: &["WordPress", "cPanel", "GoDaddy", "Cloudflare"],
        repository: None,
        live: Some("https://aquaswimacademy.com/"),
        design: None,
    },
    Project {
        id: 3,
        title: "CampLanka iOS Mobile App",
        description: "Comprehensive camping experience app for Sri Lanka with location discovery, trip planning, weather integration, and advanced iOS features like MapKit and Face Recognition.",
        category: ProjectCategory::MobileApp,
        tags: &["Swift", "SwiftUI", "Firebase", "MapKit", "EventKit", "Push Notifications", "Face Recognition", "RapidAPI"],
        repository: Some("https://github.com/NisalMadura/CampLanka.git"),
        live: None,
        design: None,
    },
    Project {
        id: 4,
        title: "Weather Web App",
        description: "Interactive weather application displaying comprehensive weather details including temperature, humidity, wind speed, and rainfall data for any location worldwide.",
        category: ProjectCategory::WebApp,
        tags: &["HTML", "CSS", "JavaScript", "Weather API"],
        repository: Some("https://github.com/NisalMadura/Weather-App.git"),
        live: None,
        design: None,
    },
    Project {
        id: 5,
        title: "Game-Quest Multi-Game Platform",
        description: "Interactive gaming platform featuring 5 different game types with advanced data structures implementation and MVC architecture for optimal performance.",
        category: ProjectCategory::WebApp,
        tags: &["Java", "MySQL", "Data Structures", "MVC Architecture"],
        repository: Some("https://github.com/NisalMadura/Game-Quest.git"),
        live: None,
        design: None,
    },
    Project {
        id: 6,
        title: "Gym Management System",
        description: "Complete gym management solution with member registration, workout tracking, payment processing, and trainer scheduling with REST API integration.",
        category: ProjectCategory::WebApp,
        tags: &["PHP", "MySQL", "HTML", "CSS", "JavaScript", "REST API"],
        repository: Some("https://github.com/NisalMadura/Gym-management-system.git"),
        live: None,
        design: None,
    },
    Project {
        id: 7,
        title: "Help Desk Management System",
        description: "Professional IT support system developed for BOI IT Department with ticket management, priority handling, and automated workflow processes.",
        category: ProjectCategory::WebApp,
        tags: &["PHP", "HTML", "CSS", "MS SQL", "JavaScript"],
        repository: Some("https://github.com/NisalMadura/Help-desk-management-system.git"),
        live: None,
        design: None,
    },
    Project {
        id: 8,
        title: "User Declarant Approval System",
        description: "Enterprise-level approval system for BOI companies with automated workflows, document management, and microservices architecture for scalability.",
        category: ProjectCategory::WebApp,
        tags: &["C#", "ASP.NET", "HTML", "CSS", "MS SQL", "Microservices"],
        repository: None,
        live: None,
        design: None,
    },
    Project {
        id: 9,
        title: "Green Light Solar Inventory Management",
        description: "Comprehensive inventory management system for solar energy equipment with stock tracking, supplier management, and automated reporting features.",
        category: ProjectCategory::WebApp,
        tags: &["C#", "MS SQL"],
        repository: Some("https://github.com/NisalMadura/GreenLightSolar.git"),
        live: None,
        design: None,
    },
    Project {
        id: 10,
        title: "Square Game iOS App",
        description: "Engaging puzzle game for iOS devices built with modern SwiftUI framework, featuring intuitive controls and progressive difficulty levels.",
        category: ProjectCategory::MobileApp,
        tags: &["Swift", "SwiftUI", "iOS Development"],
        repository: Some("https://github.com/NisalMadura/square-game.git"),
        live: None,
        design: None,
    },
    Project {
        id: 11,
        title: "CampLanka iOS App UI/UX Design",
        description: "Complete design system for CampLanka mobile application including low and high fidelity wireframes, user journey mapping, and interactive prototypes.",
        category: ProjectCategory::UiUx,
        tags: &["Figma", "UI Design", "UX Research", "Prototyping", "Wireframing"],
        repository: None,
        live: None,
        design: Some("https://www.figma.com/design/3cMeLFZ5SzQSViCAaOI6lR/CampLanka?node-id=1-2&t=0BJsQJFOjTShDYLn-1"),
    },
    Project {
        id: 12,
        title: "BOC Bank Mobile App Redesign",
        description: "Modern redesign of Sri Lanka Bank of Ceylon mobile application with improved user experience, accessibility features, and contemporary banking interface.",
        category: ProjectCategory::UiUx,
        tags: &["Figma", "Mobile Design", "Banking UX", "Redesign"],
        repository: None,
        live: None,
        design: Some("https://www.figma.com/design/NIrgJniTTZCRZ0D51NU5G2/BOC-Mobile-App?t=MzsOF3hkXH95sWO1-1"),
    },
    Project {
        id: 13,
        title: "CookIt Meal Planner App Design",
        description: "Comprehensive meal planning application design for iOS with recipe management, nutritional tracking, and shopping list integration featuring both low and high fidelity designs.",
        category: ProjectCategory::UiUx,
        tags: &["Figma", "iOS Design", "Food App", "Meal Planning", "Prototyping"],
        repository: None,
        live: None,
        design: Some("https://www.figma.com/design/pz2L0E3hw3SjNqox3hJYsY/CookIt?node-id=0-1&t=aJfYiL5kT8Mc9G5V-1"),
    },
    Project {
        id: 14,
        title: "BOI Company Site Approval Design",
        description: "Professional web interface design for BOI company approval processes with streamlined workflows and government compliance standards.",
        category: ProjectCategory::UiUx,
        tags: &["Figma", "Web Design", "Government Portal", "Business Process"],
        repository: None,
        live: None,
        design: Some("https://www.figma.com/design/vdCDT9ndENo62S8yjRSlB2/Untitled?t=ymiUPtNTHIlNFuEd-1"),
    },
    Project {
        id: 15,
        title: "Ocean Books E-Library Design",
        description: "Complete digital library platform design including user personas, wireframes, prototypes, user flow diagrams, and comprehensive design system for enhanced reading experience.",
        category: ProjectCategory::UiUx,
        tags: &["Figma", "Library Design", "User Research", "Design System", "Prototyping"],
        repository: None,
        live: None,
        design: Some("https://www.figma.com/design/Xu4ii6ZTzv0d1heXItIZhP/14382444_COCOBSCCOMP231P031_NIB203CR_CW?node-id=0-1&t=lJO8AdEZRWiy4LtH-1"),
    },
];

static SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        name: "LinkedIn",
        url: "https://www.linkedin.com/in/nisal-madura/",
    },
    SocialLink {
        name: "GitHub",
        url: "https://github.com/NisalMadura",
    },
    SocialLink {
        name: "Facebook",
        url: "https://www.facebook.com/nisal.perera.146069",
    },
    SocialLink {
        name: "Instagram",
        url: "https://www.instagram.com/nisal_madura_perera?igsh=eHNiY2dqbTBrZ2xt",
    },
];

pub fn owner() -> &'static Owner {
    &OWNER
}

pub fn skill_categories() -> &'static [SkillCategory] {
    &SKILL_CATEGORIES
}

pub fn projects() -> &'static [Project] {
    &PROJECTS
}

pub fn social_links() -> &'static [SocialLink] {
    &SOCIAL_LINKS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_project_ids_are_unique() {
        let ids: HashSet<u32> = projects().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), projects().len());
    }

    #[test]
    fn test_every_link_is_https() {
        let project_links = projects().iter().flat_map(|p| p.links()).map(|(_, url)| url);
        let social = social_links().iter().map(|l| l.url);
        for url in project_links.chain(social) {
            assert!(url.starts_with("https://"), "not an https link: {}", url);
        }
    }
}
