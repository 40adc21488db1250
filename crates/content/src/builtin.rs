use shared::domain::{
    Category, ContactInfo, GalleryItem, ItemId, MenuPage, NavIcon, NavLink, Profile, SiteContent,
    Skill, SocialLink,
};

/// Content shipped with the binary, used when no content file is configured.
pub fn builtin_site_content() -> SiteContent {
    SiteContent {
        profile: profile(),
        menu: menu(),
        social_links: social_links(),
        skills: skills(),
        projects: projects(),
        filters: Vec::new(),
        contact: ContactInfo::default(),
    }
}

fn profile() -> Profile {
    Profile {
        first_name: "Kunal".to_string(),
        last_name: "Bansal".to_string(),
        headline: "Full Stack Developer".to_string(),
        greeting: "Hello, I'm KB".to_string(),
        bio: "Passionate full-stack developer with 5+ years of experience creating digital \
              solutions that make a difference. I love turning complex problems into simple, \
              beautiful designs."
            .to_string(),
        hero_title: "Portfolio".to_string(),
        hero_cta: "View My Work".to_string(),
    }
}

fn menu() -> Vec<MenuPage> {
    vec![
        MenuPage {
            title: "Main".to_string(),
            items: vec![
                NavLink::new("Home", "/", NavIcon::Home),
                NavLink::new("About", "/about", NavIcon::User),
                NavLink::new("Resume", "/resume", NavIcon::Resume),
            ],
        },
        MenuPage {
            title: "Work".to_string(),
            items: vec![
                NavLink::new("Portfolio", "/portfolio", NavIcon::Briefcase),
                NavLink::new("Contact", "/contact", NavIcon::Envelope),
            ],
        },
    ]
}

fn social_links() -> Vec<SocialLink> {
    [
        ("Facebook", NavIcon::Facebook, "https://facebook.com"),
        (
            "Instagram",
            NavIcon::Instagram,
            "https://www.instagram.com/official_kunal_bansal/",
        ),
        ("Linkedin", NavIcon::Linkedin, "https://linkedin.com"),
        ("Github", NavIcon::Github, "https://github.com"),
    ]
    .into_iter()
    .map(|(name, icon, url)| SocialLink {
        name: name.to_string(),
        icon,
        url: url.to_string(),
    })
    .collect()
}

fn skills() -> Vec<Skill> {
    [
        ("React", 90),
        ("JavaScript", 85),
        ("CSS/Tailwind", 80),
        ("Node.js", 75),
        ("UI/UX Design", 70),
    ]
    .into_iter()
    .map(|(name, level)| Skill {
        name: name.to_string(),
        level,
    })
    .collect()
}

fn projects() -> Vec<GalleryItem> {
    vec![
        GalleryItem {
            id: ItemId(1),
            title: "E-Commerce Website".to_string(),
            description: "A full-stack e-commerce solution with React and Node.js".to_string(),
            image_ref: "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=400&h=300&fit=crop"
                .to_string(),
            category: Category::Web,
            technologies: strings(&["React", "Node.js", "MongoDB"]),
            live_link: Some("#".to_string()),
            source_link: Some("https://github.com".to_string()),
            featured: true,
        },
        GalleryItem {
            id: ItemId(2),
            title: "Mobile App UI".to_string(),
            description: "Modern mobile application interface design".to_string(),
            image_ref: "https://images.unsplash.com/photo-1512941937669-90a1b58e7e9c?w=400&h=300&fit=crop"
                .to_string(),
            category: Category::Mobile,
            technologies: strings(&["React Native", "Figma", "UI/UX"]),
            live_link: Some("#".to_string()),
            source_link: None,
            featured: false,
        },
        GalleryItem {
            id: ItemId(3),
            title: "Data Dashboard".to_string(),
            description: "Real-time analytics dashboard for business metrics".to_string(),
            image_ref: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=400&h=300&fit=crop"
                .to_string(),
            category: Category::Data,
            technologies: strings(&["JavaScript", "D3.js", "Python"]),
            live_link: None,
            source_link: Some("https://github.com".to_string()),
            featured: false,
        },
    ]
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
