use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);
    };
}

id_newtype!(ItemId);

/// Symbolic icon reference; the rendering layer picks the glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavIcon {
    Home,
    User,
    Resume,
    Briefcase,
    Envelope,
    Facebook,
    Instagram,
    Linkedin,
    Github,
    Link,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub name: String,
    pub target: String,
    pub icon: NavIcon,
}

impl NavLink {
    pub fn new(name: impl Into<String>, target: impl Into<String>, icon: NavIcon) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
            icon,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuPage {
    pub title: String,
    pub items: Vec<NavLink>,
}

/// Closed set of project tags a gallery can be filtered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Web,
    Mobile,
    Data,
    Design,
    Ai,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Web,
        Category::Mobile,
        Category::Data,
        Category::Design,
        Category::Ai,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Web => "web",
            Category::Mobile => "mobile",
            Category::Data => "data",
            Category::Design => "design",
            Category::Ai => "ai",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Web => "Web",
            Category::Mobile => "Mobile",
            Category::Data => "Data",
            Category::Design => "Design",
            Category::Ai => "AI",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == normalized)
            .ok_or_else(|| UnknownCategory(raw.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category tag '{0}'")]
pub struct UnknownCategory(pub String);

pub const ALL_FILTER_KEY: &str = "all";

/// Filter selection: the identity filter or one category tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FilterKey {
    #[default]
    All,
    Category(Category),
}

impl FilterKey {
    /// Returns `None` for anything that is neither `"all"` nor a known tag.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.trim().eq_ignore_ascii_case(ALL_FILTER_KEY) {
            return Some(FilterKey::All);
        }
        raw.parse::<Category>().ok().map(FilterKey::Category)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FilterKey::All => ALL_FILTER_KEY,
            FilterKey::Category(category) => category.as_str(),
        }
    }

    pub fn matches(self, category: Category) -> bool {
        match self {
            FilterKey::All => true,
            FilterKey::Category(wanted) => wanted == category,
        }
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for FilterKey {
    type Error = UnknownCategory;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        FilterKey::parse(&value).ok_or(UnknownCategory(value))
    }
}

impl From<FilterKey> for String {
    fn from(value: FilterKey) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub key: FilterKey,
    pub label: String,
}

impl FilterOption {
    pub fn all() -> Self {
        Self {
            key: FilterKey::All,
            label: "All".to_string(),
        }
    }

    pub fn for_category(category: Category) -> Self {
        Self {
            key: FilterKey::Category(category),
            label: category.label().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub image_ref: String,
    pub category: Category,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub live_link: Option<String>,
    #[serde(default)]
    pub source_link: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Percentage in `0..=100`.
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub icon: NavIcon,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub headline: String,
    pub greeting: String,
    pub bio: String,
    pub hero_title: String,
    pub hero_cta: String,
}

impl Profile {
    pub fn display_name(&self) -> String {
        format!("{}{}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub heading: String,
    pub blurb: String,
    pub contact_label: String,
    pub contact_target: String,
    pub cv_label: String,
    pub cv_target: String,
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            heading: "Get In Touch".to_string(),
            blurb: "Ready to bring your ideas to life? Let's talk!".to_string(),
            contact_label: "Contact Me".to_string(),
            contact_target: "/contact".to_string(),
            cv_label: "Download CV".to_string(),
            cv_target: "/resume".to_string(),
        }
    }
}

/// Everything the page renders; immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    pub profile: Profile,
    pub menu: Vec<MenuPage>,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<GalleryItem>,
    /// Empty means "derive from the catalog".
    #[serde(default)]
    pub filters: Vec<FilterOption>,
    #[serde(default)]
    pub contact: ContactInfo,
}
