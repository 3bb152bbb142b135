//! Built-in site content
//!
//! Edit these tables to change what the site shows; ids must stay unique
//! within each table (`Catalog::validate` checks this in the test suite).

use super::types::*;

/// Full horizontal logo (footer, about card)
pub const LOGO_FULL: &str = "data:image/svg+xml;charset=utf-8,%3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 450 120'%3E%3Ccircle cx='60' cy='60' r='50' fill='%23FFB347'/%3E%3Cpath d='M52 20h16v80h-16z' fill='white'/%3E%3Cpath d='M60 35c-18 0-30 12-30 30s12 30 30 30 30-12 30-30-12-30-30-30zm0 50c-12 0-20-8-20-20s8-20 20-20 20 8 20 20-8 20-20 20z' fill='white'/%3E%3Ctext x='130' y='50' font-family='Arial, sans-serif' font-weight='900' font-size='42' fill='%23000'%3EIEEE%3C/text%3E%3Ctext x='130' y='90' font-family='Arial, sans-serif' font-weight='bold' font-size='26' fill='%23000' letter-spacing='1'%3ECOMPUTER SOCIETY%3C/text%3E%3C/svg%3E";

/// Icon-only mark
pub const LOGO_ICON: &str = "data:image/svg+xml;charset=utf-8,%3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'%3E%3Ccircle cx='50' cy='50' r='50' fill='%23FFB347'/%3E%3Cg fill='white'%3E%3Crect x='44' y='15' width='12' height='70'/%3E%3Cpath d='M50 30c-20 0-30 10-30 20s10 20 30 20c20 0 30-10 30-20s-10-20-30-20zm0 32c-12 0-18-6-18-12s6-12 18-12 18 6 18 12-6 12-18 12z'/%3E%3C/g%3E%3C/svg%3E";

pub static EVENTS: &[Event] = &[
    Event {
        id: "1",
        title: "AI-Powered Hackathon 2025",
        date: "2025-01-05",
        time: "10:00 AM",
        venue: "Main Auditorium",
        category: EventCategory::Hackathon,
        domain: EventDomain::AiMl,
        status: EventStatus::Live,
        image: "https://images.unsplash.com/photo-1546776310-eef45dd6d63c?auto=format&fit=crop&q=80&w=800",
        description: "Join us for an exhilarating 24-hour hackathon designed to challenge your problem-solving skills using the power of Artificial Intelligence. Teams will compete to build innovative solutions addressing real-world challenges in healthcare, finance, and sustainability. Mentorship will be provided by leading AI experts from top tech companies. This is your chance to network, learn, and win prizes worth ₹50,000!",
        speaker: Some("Dr. Alan Turing"),
    },
    Event {
        id: "2",
        title: "Web Development Bootcamp",
        date: "2025-02-14",
        time: "09:00 AM",
        venue: "Lab 305",
        category: EventCategory::Workshop,
        domain: EventDomain::WebDevelopment,
        status: EventStatus::Open,
        image: "https://images.unsplash.com/photo-1547658719-da2b51169166?auto=format&fit=crop&q=80&w=800",
        description: "Dive deep into modern web development in this intensive 2-day bootcamp. We will cover the complete MERN stack (MongoDB, Express, React, Node.js), starting from the basics of component-based architecture to deploying full-stack applications. Ideal for beginners and intermediate developers looking to solidify their skills. Participants will build a portfolio-ready project by the end of the workshop.",
        speaker: Some("Jane Doe"),
    },
    Event {
        id: "3",
        title: "UI/UX Design Fundamentals",
        date: "2025-03-18",
        time: "10:00 AM",
        venue: "Seminar Hall",
        category: EventCategory::Workshop,
        domain: EventDomain::General,
        status: EventStatus::Open,
        image: "https://images.unsplash.com/photo-1561070791-2526d30994b5?auto=format&fit=crop&q=80&w=800",
        description: "Master the art of creating intuitive and aesthetically pleasing digital experiences. This workshop covers the core principles of User Interface (UI) and User Experience (UX) design, including wireframing, prototyping, color theory, and typography. You will learn how to use industry-standard tools like Figma to bring your design ideas to life. No prior design experience is required.",
        speaker: Some("Sarah Jenkins"),
    },
    Event {
        id: "4",
        title: "IoT Future Trends",
        date: "2025-05-05",
        time: "02:00 PM",
        venue: "Virtual (Zoom)",
        category: EventCategory::Webinar,
        domain: EventDomain::HardwareIot,
        status: EventStatus::Closing,
        image: "https://images.unsplash.com/photo-1518770660439-4636190af475?auto=format&fit=crop&q=80&w=800",
        description: "Explore the transformative potential of the Internet of Things (IoT) in this exclusive webinar. We will discuss emerging trends such as Edge Computing, 5G integration, and AIoT (AI + IoT). Discover how smart cities, connected healthcare, and industrial automation are reshaping our world. The session includes a live Q&A with industry veteran Elon Musk.",
        speaker: Some("Elon Musk (Virtual)"),
    },
];

pub static ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        id: "1",
        title: "Best Student Branch Award",
        level: AchievementLevel::International,
        date: "2024",
        winners: "Branch Team",
        description: "Recognized as the most active student branch globally.",
        category: AchievementCategory::Award,
        image: "https://images.unsplash.com/photo-1565514020176-6c2235b8b337?auto=format&fit=crop&q=80&w=800",
    },
    Achievement {
        id: "2",
        title: "HackMIT Winners",
        level: AchievementLevel::International,
        date: "2023",
        winners: "Team Alpha",
        description: "First place in the sustainability track at HackMIT.",
        category: AchievementCategory::Competition,
        image: "https://images.unsplash.com/photo-1523240795612-9a054b0db644?auto=format&fit=crop&q=80&w=800",
    },
];

const fn member(
    id: &'static str,
    name: &'static str,
    role: &'static str,
    image: &'static str,
) -> TeamMember {
    TeamMember {
        id,
        name,
        role,
        image,
        domain: None,
        linkedin: None,
        email: None,
        is_lead: false,
    }
}

const fn domain_member(
    id: &'static str,
    name: &'static str,
    role: &'static str,
    domain: &'static str,
    image: &'static str,
    is_lead: bool,
) -> TeamMember {
    TeamMember {
        id,
        name,
        role,
        image,
        domain: Some(domain),
        linkedin: None,
        email: None,
        is_lead,
    }
}

pub static TEAM_MEMBERS: &[TeamMember] = &[
    member("f1", "Dr. Jayalakshmi", "Faculty Advisor", "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?auto=format&fit=crop&q=80&w=400"),
    member("f2", "Dr. Ying Yue", "Faculty Advisor", "https://images.unsplash.com/photo-1580489944761-15a19d654956?auto=format&fit=crop&q=80&w=400"),
    member("f3", "Prof. John Doe", "Faculty Advisor", "https://images.unsplash.com/photo-1560250097-0b93528c311a?auto=format&fit=crop&q=80&w=400"),
    member("e1", "Alice Johnson", "Chairperson", "https://images.unsplash.com/photo-1494790108377-be9c29b29330?auto=format&fit=crop&q=80&w=400"),
    member("e2", "Bob Wilson", "Vice Chair", "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?auto=format&fit=crop&q=80&w=400"),
    member("e3", "Charlie Brown", "Secretary", "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?auto=format&fit=crop&q=80&w=400"),
    member("e4", "Diana Prince", "Treasurer", "https://images.unsplash.com/photo-1534528741775-53994a69daeb?auto=format&fit=crop&q=80&w=400"),
    domain_member("w1", "Evan Wright", "Web Lead", "Web Development", "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?auto=format&fit=crop&q=80&w=400", true),
    domain_member("w2", "Fiona Green", "Developer", "Web Development", "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?auto=format&fit=crop&q=80&w=400", false),
    domain_member("w3", "George Hall", "Developer", "Web Development", "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?auto=format&fit=crop&q=80&w=400", false),
    domain_member("a1", "Hannah Lee", "AI Lead", "AI/ML", "https://images.unsplash.com/photo-1544005313-94ddf0286df2?auto=format&fit=crop&q=80&w=400", true),
    domain_member("a2", "Ian Scott", "Researcher", "AI/ML", "https://images.unsplash.com/photo-1552058544-f2b08422138a?auto=format&fit=crop&q=80&w=400", false),
];

/// Domain groups shown on the Team page, in display order
pub static TEAM_DOMAINS: &[&str] = &["Web Development", "AI/ML", "Hardware/IoT", "Design"];

const fn photo(
    id: &'static str,
    src: &'static str,
    caption: &'static str,
    category: &'static str,
) -> GalleryItem {
    GalleryItem {
        id,
        src,
        caption,
        category,
    }
}

pub static ROBOTICS_GALLERY: &[GalleryItem] = &[
    photo("r1", "https://images.unsplash.com/photo-1485827404703-89b55fcc595e?auto=format&fit=crop&q=80&w=800", "System Design", "Workshop"),
    photo("r2", "https://images.unsplash.com/photo-1581092921461-eab62e97a782?auto=format&fit=crop&q=80&w=800", "Assembly", "Workshop"),
    photo("r3", "https://images.unsplash.com/photo-1565514020176-6c2235b8b337?auto=format&fit=crop&q=80&w=800", "Testing", "Workshop"),
    photo("r4", "https://images.unsplash.com/photo-1530893609608-32a9af3aa95c?auto=format&fit=crop&q=80&w=800", "Final Demo", "Workshop"),
];

pub static HIGHLIGHTS_GALLERY: &[GalleryItem] = &[
    photo("e1", "https://images.unsplash.com/photo-1505373877841-8d25f7d46678?auto=format&fit=crop&q=80&w=800", "Opening", "Event"),
    photo("e2", "https://images.unsplash.com/photo-1475721027767-p743028df60?auto=format&fit=crop&q=80&w=800", "Keynote", "Event"),
    photo("e3", "https://images.unsplash.com/photo-1544531586-fde5298cdd40?auto=format&fit=crop&q=80&w=800", "Audience", "Event"),
    photo("e4", "https://images.unsplash.com/photo-1492684223066-81342ee5ff30?auto=format&fit=crop&q=80&w=800", "Closing", "Event"),
];

pub static COMMUNITY_GALLERY: &[GalleryItem] = &[
    photo("1", "https://images.unsplash.com/photo-1523580494863-6f3031224c94?auto=format&fit=crop&q=80&w=800", "Orientation Day 2024", "Social"),
    photo("2", "https://images.unsplash.com/photo-1504384308090-c54be3855833?auto=format&fit=crop&q=80&w=800", "Hackathon Finals", "Hackathons"),
    photo("3", "https://images.unsplash.com/photo-1517048676732-d65bc937f952?auto=format&fit=crop&q=80&w=800", "Web Dev Workshop", "Workshops"),
    photo("4", "https://images.unsplash.com/photo-1511578314322-379afb476865?auto=format&fit=crop&q=80&w=800", "Award Ceremony", "Celebrations"),
];

pub static MILESTONES: &[Milestone] = &[
    Milestone { year: 2018, title: "Chapter Established", description: "Founded with 20 members.", icon: "📍" },
    Milestone { year: 2020, title: "Best Student Branch", description: "Regional award winner.", icon: "🏆" },
    Milestone { year: 2022, title: "First Int. Conf.", description: "Hosted IEEE conference.", icon: "🌏" },
    Milestone { year: 2023, title: "500+ Members", description: "Reached membership milestone.", icon: "🚀" },
    Milestone { year: 2025, title: "Current Era", description: "Innovating for the future.", icon: "✨" },
];

pub static ANNOUNCEMENTS: &[Announcement] = &[
    Announcement {
        id: "1",
        date: "31/10/25",
        event: "Event: IEEE CS PROJECT EXPO 2025",
        title: Some("IEEE CS Project Expo 2025 - Build Quest"),
        full_date: Some("October 31 & November 01, 2025"),
        prizes: Some("1st - ₹4,000 | 2nd - ₹2,000 | 3rd - ₹1,000"),
        link: Some("https://vintra.kalasalingam.ac.in/"),
        image: Some("https://images.unsplash.com/photo-1517245386807-bb43f82c33c4?auto=format&fit=crop&q=80&w=800"),
    },
    Announcement {
        id: "2",
        date: "24/11/25",
        event: "Event: IEEE Codefest 2025",
        title: Some("IEEE Codefest 2025"),
        full_date: Some("November 24, 2025"),
        prizes: Some("1st - ₹5,000 | 2nd - ₹3,000"),
        link: Some("#"),
        image: Some("https://images.unsplash.com/photo-1504384308090-c54be3855833?auto=format&fit=crop&q=80&w=800"),
    },
    Announcement {
        id: "3",
        date: "20/12/25",
        event: "Event: IEEE Tech Talk",
        title: Some("IEEE Tech Talk Series: Future of AI"),
        full_date: Some("December 20, 2025"),
        prizes: Some("Participation Certificates"),
        link: Some("#"),
        image: Some("https://images.unsplash.com/photo-1552058544-f2b08422138a?auto=format&fit=crop&q=80&w=800"),
    },
];

pub static SOCIETIES: &[Society] = &[
    Society {
        id: "1",
        name: "IEEE Robotics & Automation Society",
        logo: "https://upload.wikimedia.org/wikipedia/commons/2/21/IEEE_Robotics_and_Automation_Society_logo.png",
        description: Some("Fostering the development and application of robotics and automation technologies for the benefit of humanity."),
        link: Some("https://www.ieee-ras.org/"),
    },
    Society {
        id: "2",
        name: "IEEE Signal Processing Society",
        logo: "https://upload.wikimedia.org/wikipedia/commons/8/87/IEEE_Signal_Processing_Society_logo.png",
        description: Some("The world’s premier association for signal processing engineers and industry professionals."),
        link: Some("https://signalprocessingsociety.org/"),
    },
    Society {
        id: "3",
        name: "IEEE",
        logo: "https://upload.wikimedia.org/wikipedia/commons/2/21/IEEE_logo.svg",
        description: Some("The world’s largest technical professional organization dedicated to advancing technology for the benefit of humanity."),
        link: Some("https://www.ieee.org/"),
    },
    Society {
        id: "4",
        name: "IEEE WIE KARE",
        logo: "https://upload.wikimedia.org/wikipedia/commons/f/f3/IEEE_WIE_Logo.png",
        description: Some("A global network of IEEE members and volunteers dedicated to promoting women engineers and scientists."),
        link: Some("https://wie.ieee.org/"),
    },
    Society {
        id: "5",
        name: "IEEE Computational Intelligence Society",
        logo: "https://upload.wikimedia.org/wikipedia/commons/e/e0/IEEE_Computational_Intelligence_Society_logo.png",
        description: Some("Focusing on the theory, design, application, and development of biologically and linguistically motivated computational paradigms."),
        link: Some("https://cis.ieee.org/"),
    },
];

/// Background images cycled by the About page hero
pub static ABOUT_SLIDESHOW: &[&str] = &[
    "https://images.unsplash.com/photo-1517245386807-bb43f82c33c4?auto=format&fit=crop&q=80&w=2070",
    "https://images.unsplash.com/photo-1540575467063-178a50c2df87?auto=format&fit=crop&q=80&w=2070",
    "https://images.unsplash.com/photo-1523240795612-9a054b0db644?auto=format&fit=crop&q=80&w=2070",
    "https://images.unsplash.com/photo-1552664730-d307ca884978?auto=format&fit=crop&q=80&w=2070",
];

/// Words cycled by the Home hero typewriter
pub static HERO_WORDS: &[&str] = &["Innovators", "Problem Solvers", "Future Leaders", "Developers"];
