//! Value types shared by site and theme documents.
//!
//! | Module     | Types                                        |
//! |------------|----------------------------------------------|
//! | `head`     | `HeadEntry` (`head = [...]`)                 |
//! | `link`     | `NavItem`, `SocialLink`, link syntax checks  |
//! | `settings` | `ThemeSettings`, `SettingKind`, deep merge   |

pub mod head;
pub mod link;
pub mod settings;

pub use head::{HeadEntry, validate_head};
pub use link::{LinkKind, NavItem, SocialLink, check_link, classify_link, validate_nav, validate_social};
pub use settings::{SettingKind, ThemeSettings, check_finite, deep_merge, merged};
