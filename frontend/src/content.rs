// Static portfolio content.

use crate::interactive::carousel::Testimonial;

pub const OWNER_NAME: &str = "Muhammad Rayyan";
pub const OWNER_EMAIL: &str = "rayyanasghar9@gmail.com";

#[derive(Clone, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub demo_url: &'static str,
    pub github_url: &'static str,
}

#[derive(Clone, PartialEq)]
pub struct Tech {
    pub name: &'static str,
    /// Path to the icon under /assets/tech.
    pub icon: &'static str,
    pub experience: &'static str,
}

pub struct TechCategory {
    pub name: &'static str,
    pub items: &'static [Tech],
}

pub struct SocialLink {
    pub label: &'static str,
    pub icon: &'static str,
    /// `None` means the entry copies the owner's email instead of linking.
    pub url: Option<&'static str>,
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Connectify: Chat Application",
        description: "Built an end-to-end application like a messenger application in which you can create your profile, add friends, create groups, etc",
        image: "/assets/connect.png",
        technologies: &["React", "Node.js", "MySQL", "Typescript", "Express JS"],
        demo_url: "https://connectify-two-phi.vercel.app/",
        github_url: "https://github.com/rayyanbey/connectify",
    },
    Project {
        id: 2,
        title: "Admin Dashboard",
        description: "Created a complete dashboard that manages a travel company's website's content",
        image: "/assets/admin.png",
        technologies: &["Next.js", "Shadcn-UI", "Tailwind CSS", "Vercel", "MySQL"],
        demo_url: "https://admin-dashboard-green-sigma.vercel.app/",
        github_url: "https://github.com/rayyanbey/admin-dashboard",
    },
    Project {
        id: 3,
        title: "Dar-el-mecca: Travel Agency",
        description: "Created a complete server side of this company's main website in next js",
        image: "/assets/darelmecca.png",
        technologies: &["Next.js", "Shadcn-UI", "Tailwind CSS", "Vercel", "MySQL"],
        demo_url: "https://dar-el-mecca.vercel.app/",
        github_url: "https://github.com/rayyanbey/dar-el-mecca",
    },
    Project {
        id: 4,
        title: "Cuisine Control: Restaurant Management System",
        description: "Built an end-to-end application for managing recipes and ingredients, involving full stack development. This project taught me web development using Java and Spring Boot.",
        image: "/assets/cuisine.png",
        technologies: &["Spring Boot", "Bootstrap", "Thymeleaf", "PostgreSQL"],
        demo_url: "https://github.com/rayyanbey/Cuisine-Control",
        github_url: "https://github.com/rayyanbey/Cuisine-Control",
    },
    Project {
        id: 5,
        title: "Streamify: Video streaming application",
        description: "Developed the first iteration of a video-sharing platform similar to YouTube. Implemented key features, including profile creation, updating, subscription, and video sharing with thumbnails and descriptions.",
        image: "/assets/stream.png",
        technologies: &["React", "Node.js", "MongoDB", "eraser.io", "Express JS"],
        demo_url: "https://github.com/rayyanbey/streamify_backend",
        github_url: "https://github.com/rayyanbey/streamify_backend",
    },
    Project {
        id: 6,
        title: "Codeinsight-IDE",
        description: "Your coding partner",
        image: "/assets/codeinsight.png",
        technologies: &["React", "Node.js", "MongoDB", "Express JS", "Postman"],
        demo_url: "https://web-project-frontend-main.vercel.app/",
        github_url: "https://github.com/rabiuddin/Web_Project_Backend",
    },
    Project {
        id: 7,
        title: "Gen-1",
        description: "Agency website for a company that provides Digital Solution",
        image: "/assets/Gen1.png",
        technologies: &["Next.js", "Tailwind CSS", "Shadcn-UI", "Vercel"],
        demo_url: "https://gen1-design.vercel.app/",
        github_url: "https://github.com/rayyanbey/gen1",
    },
];

macro_rules! tech {
    ($name:expr, $icon:expr, $exp:expr) => {
        Tech {
            name: $name,
            icon: concat!("/assets/tech/", $icon, ".svg"),
            experience: $exp,
        }
    };
}

pub const TECH_STACK: &[TechCategory] = &[
    TechCategory {
        name: "frontend",
        items: &[
            tech!("React", "react", "2+ years"),
            tech!("Next.js", "nextjs", "2+ years"),
            tech!("Tailwind CSS", "tailwindcss", "2+ years"),
            tech!("ShadCN", "shadcnui", "1+ years"),
            tech!("Bootstrap", "bootstrap", "1+ years"),
        ],
    },
    TechCategory {
        name: "backend",
        items: &[
            tech!("Node.js", "nodejs", "2+ years"),
            tech!("Express js", "express", "2+ years"),
            tech!("SpringBoot", "springboot", "1+ years"),
            tech!("Next.js", "nextjs", "2+ years"),
        ],
    },
    TechCategory {
        name: "databases",
        items: &[
            tech!("PostgreSQL", "postgresql", "1+ years"),
            tech!("MySQL", "mysql", "1+ years"),
            tech!("Firebase", "firebase", "1+ years"),
            tech!("MongoDB", "mongodb", "2+ years"),
        ],
    },
    TechCategory {
        name: "ORMs",
        items: &[
            tech!("Sequelize", "sequelize", "0.5 years"),
            tech!("Mongoose", "mongoose", "1+ years"),
            tech!("Prisma", "prisma", "0.5 years"),
        ],
    },
    TechCategory {
        name: "devops",
        items: &[tech!("Vercel", "vercel", "2+ years")],
    },
    TechCategory {
        name: "tools",
        items: &[
            tech!("Git", "git", "3+ years"),
            tech!("Figma", "figma", "1+ years"),
            tech!("Postman", "postman", "3+ years"),
            tech!("V0 dev", "vercel", "1+ years"),
        ],
    },
    TechCategory {
        name: "languages",
        items: &[
            tech!("JavaScript", "javascript", "2+ years"),
            tech!("SQL", "mysql", "2+ years"),
            tech!("Java", "java", "2+ years"),
            tech!("Python", "python", "1+ years"),
            tech!("C++", "cplusplus", "3+ years"),
        ],
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        icon: "/assets/social/github.svg",
        url: Some("https://github.com/rayyanbey"),
    },
    SocialLink {
        label: "LinkedIn",
        icon: "/assets/social/linkedin.svg",
        url: Some("https://www.linkedin.com/in/rayyan-asghar-4520262a5/"),
    },
    SocialLink {
        label: "Hashnode",
        icon: "/assets/social/hashnode.svg",
        url: Some("https://hashnode.com/@rayyanbey"),
    },
    SocialLink {
        label: "Email",
        icon: "/assets/social/mail.svg",
        url: None,
    },
];

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            id: 1,
            name: "Client, Dar-el-mecca".to_string(),
            role: "Operations Lead".to_string(),
            company: "Dar-el-mecca Travel".to_string(),
            image: "/assets/avatars/client-1.png".to_string(),
            content: "The new site and admin tools cut our content updates from days to minutes.".to_string(),
            rating: 5,
        },
        Testimonial {
            id: 2,
            name: "Teammate, Codeinsight".to_string(),
            role: "Backend Developer".to_string(),
            company: "Codeinsight-IDE".to_string(),
            image: "/assets/avatars/client-2.png".to_string(),
            content: "Clean components, clear commits and always shipped on time.".to_string(),
            rating: 5,
        },
        Testimonial {
            id: 3,
            name: "Client, Gen-1".to_string(),
            role: "Founder".to_string(),
            company: "Gen-1 Design".to_string(),
            image: "/assets/avatars/client-3.png".to_string(),
            content: "Took a rough brief and turned it into a fast, polished agency site.".to_string(),
            rating: 4,
        },
    ]
}
