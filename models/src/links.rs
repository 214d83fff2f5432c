use crate::build::BuildArtifacts;
use crate::message::MessageId;

#[derive(PartialEq, Debug, Clone, Copy, Eq)]
pub enum LinkIcon {
    FolderOpen,
}

#[derive(PartialEq, Debug, Clone, Eq)]
pub enum LinkText {
    Message(MessageId),
    Literal(String),
}

/// One row of a link group. Rows without `link` are shown as plain text.
#[derive(PartialEq, Debug, Clone, Eq)]
pub struct LinkEntry {
    pub title: MessageId,
    pub icon: LinkIcon,
    pub link: Option<String>,
    pub link_text: LinkText,
}

impl LinkEntry {
    fn download(title: MessageId, link: &str, link_text: MessageId) -> Self {
        LinkEntry {
            title,
            icon: LinkIcon::FolderOpen,
            link: Some(link.to_owned()),
            link_text: LinkText::Message(link_text),
        }
    }

    pub fn is_navigable(&self) -> bool {
        self.link.is_some()
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Links for the artifacts a build has, in the order image, config, dtb,
/// logs, system map, modules.
pub fn build_links(artifacts: &BuildArtifacts) -> Vec<LinkEntry> {
    let image = present(&artifacts.kernel_image).map(|image| LinkEntry {
        title: MessageId::KernelImage,
        icon: LinkIcon::FolderOpen,
        link: None,
        link_text: LinkText::Literal(format!("kernel/{}", image)),
    });

    let downloads = [
        (&artifacts.kernel_config, MessageId::KernelConfig, MessageId::KernelConfigPath),
        (&artifacts.dtb, MessageId::Dtb, MessageId::Dtbs),
        (&artifacts.build_logs, MessageId::BuildLogs, MessageId::Logs),
        (&artifacts.system_map, MessageId::SystemMap, MessageId::SystemMapPath),
        (&artifacts.modules, MessageId::Modules, MessageId::ModulesZip),
    ]
    .into_iter()
    .filter_map(|(value, title, text)| {
        present(value).map(|link| LinkEntry::download(title, link, text))
    });

    image.into_iter().chain(downloads).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_artifacts_no_links() {
        assert!(build_links(&BuildArtifacts::default()).is_empty());
    }

    #[test]
    fn empty_strings_are_treated_as_absent() {
        let artifacts = BuildArtifacts {
            dtb: Some(String::new()),
            build_logs: Some("".into()),
            ..Default::default()
        };
        assert!(build_links(&artifacts).is_empty());
    }

    #[test]
    fn config_and_modules_only() {
        let artifacts = BuildArtifacts {
            kernel_config: Some("https://files/config".into()),
            modules: Some("https://files/modules.tar.xz".into()),
            ..Default::default()
        };

        let links = build_links(&artifacts);

        assert_eq!(
            links,
            vec![
                LinkEntry {
                    title: MessageId::KernelConfig,
                    icon: LinkIcon::FolderOpen,
                    link: Some("https://files/config".into()),
                    link_text: LinkText::Message(MessageId::KernelConfigPath),
                },
                LinkEntry {
                    title: MessageId::Modules,
                    icon: LinkIcon::FolderOpen,
                    link: Some("https://files/modules.tar.xz".into()),
                    link_text: LinkText::Message(MessageId::ModulesZip),
                },
            ]
        );
    }

    #[test]
    fn kernel_image_is_display_only() {
        let artifacts = BuildArtifacts {
            kernel_image: Some("Image".into()),
            dtb: Some("https://files/dtbs".into()),
            ..Default::default()
        };

        let links = build_links(&artifacts);

        assert_eq!(links.len(), 2);
        assert_eq!(links[0].title, MessageId::KernelImage);
        assert!(!links[0].is_navigable());
        assert_eq!(links[0].link_text, LinkText::Literal("kernel/Image".into()));
        assert!(links[1].is_navigable());
    }

    #[test]
    fn all_artifacts_keep_fixed_order() {
        let artifacts = BuildArtifacts {
            kernel_image: Some("bzImage".into()),
            kernel_config: Some("c".into()),
            dtb: Some("d".into()),
            build_logs: Some("l".into()),
            system_map: Some("s".into()),
            modules: Some("m".into()),
        };

        let titles: Vec<MessageId> = build_links(&artifacts).iter().map(|l| l.title).collect();

        assert_eq!(
            titles,
            vec![
                MessageId::KernelImage,
                MessageId::KernelConfig,
                MessageId::Dtb,
                MessageId::BuildLogs,
                MessageId::SystemMap,
                MessageId::Modules,
            ]
        );
    }
}
