//! Message Catalogue
//!
//! Localized user-facing messages for permission and business rule failures.

use std::fmt;

/// Locales the catalogue carries messages for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    EnUs,
    ZhCn,
    ZhTw,
}

impl Locale {
    /// Pick a locale from an `Accept-Language` header value.
    ///
    /// Entries are tried in descending `q` order; the first supported
    /// language wins. Unsupported or malformed headers yield the default.
    #[must_use]
    pub fn from_accept_language(header: &str) -> Self {
        let mut ranges: Vec<(f32, &str)> = header
            .split(',')
            .filter_map(|entry| {
                let mut parts = entry.trim().split(';');
                let tag = parts.next()?.trim();
                if tag.is_empty() {
                    return None;
                }
                let quality = parts
                    .find_map(|p| p.trim().strip_prefix("q="))
                    .and_then(|q| q.trim().parse::<f32>().ok())
                    .unwrap_or(1.0);
                Some((quality, tag))
            })
            .collect();

        // Stable sort keeps header order between equal weights
        ranges.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

        ranges
            .into_iter()
            .filter(|(quality, _)| *quality > 0.0)
            .find_map(|(_, tag)| Self::from_tag(tag))
            .unwrap_or_default()
    }

    fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.to_ascii_lowercase().replace('_', "-");
        if tag == "zh" || tag.starts_with("zh-") {
            if tag.contains("-tw") || tag.contains("-hk") || tag.contains("-mo") || tag.contains("hant") {
                Some(Self::ZhTw)
            } else {
                Some(Self::ZhCn)
            }
        } else if tag == "en" || tag.starts_with("en-") {
            Some(Self::EnUs)
        } else {
            None
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::EnUs => "en-US",
            Self::ZhCn => "zh-CN",
            Self::ZhTw => "zh-TW",
        };
        f.write_str(tag)
    }
}

/// Keys of localized messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    NoDriverPermission,
    NoDatasourcePermission,
    DriverRepeatName,
    DriverInUse,
    NotJar,
    InvalidFileName,
    InvalidJar,
    JarExisted,
}

impl MessageKey {
    /// Catalogue key, stable across releases
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::NoDriverPermission => "I18N_NO_DRIVER_PERMISSION",
            Self::NoDatasourcePermission => "I18N_NO_DATASOURCE_PERMISSION",
            Self::DriverRepeatName => "I18N_DRIVER_REPEAT_NAME",
            Self::DriverInUse => "I18N_DRIVER_HAS_USED",
            Self::NotJar => "I18N_NOT_JAR",
            Self::InvalidFileName => "I18N_INVALID_FILE_NAME",
            Self::InvalidJar => "I18N_INVALID_JAR",
            Self::JarExisted => "I18N_JAR_EXISTED",
        }
    }

    /// Message text in the given locale
    #[must_use]
    pub fn translate(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::NoDriverPermission, Locale::EnUs) => "You do not have permission to manage drivers",
            (Self::NoDriverPermission, Locale::ZhCn) => "没有驱动管理权限",
            (Self::NoDriverPermission, Locale::ZhTw) => "沒有驅動管理權限",

            (Self::NoDatasourcePermission, Locale::EnUs) => "You do not have permission to read data sources",
            (Self::NoDatasourcePermission, Locale::ZhCn) => "没有数据源查看权限",
            (Self::NoDatasourcePermission, Locale::ZhTw) => "沒有數據源查看權限",

            (Self::DriverRepeatName, Locale::EnUs) => "A driver with this name already exists",
            (Self::DriverRepeatName, Locale::ZhCn) => "驱动名称重复",
            (Self::DriverRepeatName, Locale::ZhTw) => "驅動名稱重複",

            (Self::DriverInUse, Locale::EnUs) => "The driver is used by a data source and cannot be deleted",
            (Self::DriverInUse, Locale::ZhCn) => "驱动已被数据源使用，无法删除",
            (Self::DriverInUse, Locale::ZhTw) => "驅動已被數據源使用，無法刪除",

            (Self::NotJar, Locale::EnUs) => "Only .jar files can be uploaded",
            (Self::NotJar, Locale::ZhCn) => "只能上传 jar 文件",
            (Self::NotJar, Locale::ZhTw) => "只能上傳 jar 文件",

            (Self::InvalidFileName, Locale::EnUs) => "The file name is not valid",
            (Self::InvalidFileName, Locale::ZhCn) => "文件名不合法",
            (Self::InvalidFileName, Locale::ZhTw) => "文件名不合法",

            (Self::InvalidJar, Locale::EnUs) => "The file is not a readable jar archive",
            (Self::InvalidJar, Locale::ZhCn) => "文件不是有效的 jar 包",
            (Self::InvalidJar, Locale::ZhTw) => "文件不是有效的 jar 包",

            (Self::JarExisted, Locale::EnUs) => "A file with this name already exists for the driver",
            (Self::JarExisted, Locale::ZhCn) => "该驱动下已存在同名文件",
            (Self::JarExisted, Locale::ZhTw) => "該驅動下已存在同名文件",
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.translate(Locale::EnUs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_defaults_to_english() {
        assert_eq!(Locale::from_accept_language(""), Locale::EnUs);
        assert_eq!(Locale::from_accept_language("fr-FR,de;q=0.8"), Locale::EnUs);
    }

    #[test]
    fn test_locale_picks_chinese_variants() {
        assert_eq!(Locale::from_accept_language("zh-CN,zh;q=0.9"), Locale::ZhCn);
        assert_eq!(Locale::from_accept_language("zh_TW"), Locale::ZhTw);
        assert_eq!(Locale::from_accept_language("zh-Hant-HK"), Locale::ZhTw);
    }

    #[test]
    fn test_locale_respects_quality() {
        assert_eq!(Locale::from_accept_language("en;q=0.5, zh-CN;q=0.9"), Locale::ZhCn);
        assert_eq!(Locale::from_accept_language("zh-CN;q=0, en"), Locale::EnUs);
        assert_eq!(Locale::from_accept_language("fr, zh-TW;q=0.3"), Locale::ZhTw);
    }

    #[test]
    fn test_message_key_display_is_english() {
        assert_eq!(
            MessageKey::NoDriverPermission.to_string(),
            "You do not have permission to manage drivers"
        );
        assert_eq!(MessageKey::NoDriverPermission.translate(Locale::ZhCn), "没有驱动管理权限");
        assert_eq!(MessageKey::DriverInUse.code(), "I18N_DRIVER_HAS_USED");
    }
}
