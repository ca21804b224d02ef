use common::config::SiteConfig;

use crate::error::RenderError;

/// Icons used by the task action links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    ViewDetails,
    Hide,
    Show,
    Edit,
    Delete,
}

impl Icon {
    pub fn as_str(&self) -> &'static str {
        match self {
            Icon::ViewDetails => "t/viewdetails",
            Icon::Hide => "t/hide",
            Icon::Show => "t/show",
            Icon::Edit => "t/edit",
            Icon::Delete => "t/delete",
        }
    }
}

pub trait IconResolver {
    fn icon_url(&self, icon: &str) -> Result<String, RenderError>;
}

/// Serves icons through the theme image endpoint:
/// `<wwwroot>/theme/image.php/<theme>/core/<revision>/<icon>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeIconResolver {
    wwwroot: String,
    theme: String,
    revision: u64,
}

impl ThemeIconResolver {
    pub fn new(wwwroot: impl Into<String>, theme: impl Into<String>, revision: u64) -> Self {
        Self {
            wwwroot: wwwroot.into(),
            theme: theme.into(),
            revision,
        }
    }

    pub fn from_site(site: &SiteConfig) -> Self {
        Self::new(&site.wwwroot, &site.theme, site.theme_revision)
    }
}

fn is_valid_icon_name(icon: &str) -> bool {
    !icon.is_empty()
        && !icon.starts_with('/')
        && !icon.contains("//")
        && icon
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '/'))
}

impl IconResolver for ThemeIconResolver {
    fn icon_url(&self, icon: &str) -> Result<String, RenderError> {
        if !is_valid_icon_name(icon) {
            return Err(RenderError::unresolvable_icon(icon));
        }
        Ok(format!(
            "{}/theme/image.php/{}/core/{}/{}",
            self.wwwroot.trim_end_matches('/'),
            self.theme,
            self.revision,
            icon
        ))
    }
}
