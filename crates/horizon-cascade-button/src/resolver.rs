//! Merging explicit props with the ambient scopes.
//!
//! [`resolve`] is a pure function of its inputs and is safe to call on every
//! render. Precedence for each resolved value:
//!
//! | value      | order                                             |
//! |------------|---------------------------------------------------|
//! | size       | explicit, group, ambient, [`SizeType::Middle`]    |
//! | disabled   | explicit, ambient disabled scope                  |
//! | prefix     | explicit `prefix_cls`, `"{config prefix}-btn"`    |

use std::collections::BTreeMap;

use horizon_cascade_core::scope::{Direction, Scopes, SizeType};

use crate::diagnostics::{warning, Diagnostics};
use crate::loading::LoadingIntent;
use crate::props::{ButtonProps, ButtonShape, ButtonType, Child, Icon};
use crate::spacing::{is_two_cjk_chars, space_children};
use crate::variant::ButtonVariant;

const COMPONENT: &str = "Button";

/// What occupies the icon position of a button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconSlot {
    /// The loading indicator, shown instead of any icon while loading.
    Loading,
    Icon(Icon),
    None,
}

/// The fully resolved description of one button for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonSpec {
    pub variant: ButtonVariant,
    pub button_type: ButtonType,
    pub shape: ButtonShape,
    pub size: SizeType,
    pub disabled: bool,
    /// Whether the button reports itself as loading.
    pub loading: bool,
    pub loading_intent: LoadingIntent,
    pub ghost: bool,
    /// Overlay flag, independent of `button_type`.
    pub danger: bool,
    pub block: bool,
    pub icon: Option<Icon>,
    pub children: Vec<Child>,
    pub class_name: Option<String>,
    /// Component prefix, e.g. `ant-btn`.
    pub prefix_cls: String,
    pub direction: Direction,
    /// The label is two CJK characters and a space is inserted between them.
    pub two_cjk_chars: bool,
    pub attrs: BTreeMap<String, String>,
}

impl ButtonSpec {
    /// The spec with a different loading flag.
    pub fn with_loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// What to show in the icon position.
    pub fn icon_slot(&self) -> IconSlot {
        match (&self.icon, self.loading) {
            (_, true) => IconSlot::Loading,
            (Some(icon), false) => IconSlot::Icon(icon.clone()),
            (None, false) => IconSlot::None,
        }
    }

    /// Whether clicks should be suppressed.
    pub fn is_interaction_blocked(&self) -> bool {
        self.disabled || self.loading
    }
}

/// Resolve `props` against the scopes visible at the button.
///
/// Configuration conflicts are reported to `diagnostics` and never change the
/// result.
#[tracing::instrument(
    level = "trace",
    target = "horizon_cascade_button::resolver",
    skip_all,
    fields(href = props.href.as_deref())
)]
pub fn resolve(props: &ButtonProps, scopes: &Scopes, diagnostics: &dyn Diagnostics) -> ButtonSpec {
    let config = scopes.config();
    let button_type = props.button_type.unwrap_or_default();

    if let Some(Icon::Text(text)) = &props.icon {
        warning(diagnostics, text.chars().count() <= 2, COMPONENT, || {
            format!("`icon` is given as text `{text}`; pass an icon node instead")
        });
    }
    warning(
        diagnostics,
        !(props.ghost && button_type.is_unbordered()),
        COMPONENT,
        || "`link` or `text` button can't be a `ghost` button.".to_owned(),
    );

    let size = props
        .size
        .or(scopes.group_size())
        .or(scopes.size())
        .unwrap_or_default();
    let disabled = props.disabled.unwrap_or(scopes.disabled());

    let need_inserted = config.auto_insert_space()
        && props.children.len() == 1
        && props.icon.is_none()
        && !button_type.is_unbordered();
    let two_cjk_chars = need_inserted
        && props
            .children
            .first()
            .and_then(Child::as_text)
            .is_some_and(is_two_cjk_chars);

    ButtonSpec {
        variant: ButtonVariant::select(props),
        button_type,
        shape: props.shape.unwrap_or_default(),
        size,
        disabled,
        loading: props.loading.is_requested(),
        loading_intent: props.loading,
        ghost: props.ghost,
        danger: props.danger,
        block: props.block,
        icon: props.icon.clone(),
        children: space_children(&props.children, need_inserted),
        class_name: props.class_name.clone(),
        prefix_cls: config.component_prefix("btn", props.prefix_cls.as_deref()),
        direction: config.direction(),
        two_cjk_chars,
        attrs: props.attrs.clone(),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use horizon_cascade_core::scope::{ConfigProvider, ConfigScope};

    use super::*;
    use crate::diagnostics::CollectingDiagnostics;
    use crate::props::NodeId;

    fn resolve_quiet(props: &ButtonProps, scopes: &Scopes) -> ButtonSpec {
        resolve(props, scopes, &CollectingDiagnostics::new())
    }

    #[test]
    fn defaults() {
        let spec = resolve_quiet(&ButtonProps::new(), &Scopes::root());

        assert_eq!(spec.button_type, ButtonType::Default);
        assert_eq!(spec.shape, ButtonShape::Default);
        assert_eq!(spec.size, SizeType::Middle);
        assert!(!spec.disabled);
        assert!(!spec.loading);
        assert_eq!(spec.prefix_cls, "ant-btn");
        assert_eq!(spec.direction, Direction::Ltr);
        assert!(spec.variant.is_native());
    }

    #[test]
    fn prefix_follows_config_unless_overridden() {
        let scopes = Scopes::root().with_config(ConfigScope::default().with_prefix_cls("my"));
        assert_eq!(resolve_quiet(&ButtonProps::new(), &scopes).prefix_cls, "my-btn");

        let props = ButtonProps::new().with_prefix_cls("custom");
        assert_eq!(resolve_quiet(&props, &scopes).prefix_cls, "custom");
    }

    #[test]
    fn size_group_beats_ambient() {
        let scopes = Scopes::root()
            .with_size(Some(SizeType::Large))
            .with_group_size(Some(SizeType::Small));
        assert_eq!(resolve_quiet(&ButtonProps::new(), &scopes).size, SizeType::Small);
    }

    #[test]
    fn explicit_disabled_false_overrides_scope() {
        let scopes = Scopes::root().with_disabled(true);
        let props = ButtonProps::new().with_disabled(false);
        assert!(!resolve_quiet(&props, &scopes).disabled);
        assert!(resolve_quiet(&ButtonProps::new(), &scopes).disabled);
    }

    #[test]
    fn delayed_intent_counts_as_loading() {
        let props = ButtonProps::new().with_loading(Duration::from_millis(100));
        let spec = resolve_quiet(&props, &Scopes::root());
        assert!(spec.loading);
        assert_eq!(spec.icon_slot(), IconSlot::Loading);
    }

    #[test]
    fn icon_slot_without_loading() {
        let props = ButtonProps::new().with_icon(Icon::Glyph("search".into()));
        let spec = resolve_quiet(&props, &Scopes::root());
        assert_eq!(spec.icon_slot(), IconSlot::Icon(Icon::Glyph("search".into())));
        assert_eq!(spec.clone().with_loading(true).icon_slot(), IconSlot::Loading);

        let bare = resolve_quiet(&ButtonProps::new(), &Scopes::root());
        assert_eq!(bare.icon_slot(), IconSlot::None);
    }

    #[test]
    fn danger_passes_through_with_type() {
        let props = ButtonProps::new()
            .with_type(ButtonType::Primary)
            .with_danger(true);
        let spec = resolve_quiet(&props, &Scopes::root());
        assert_eq!(spec.button_type, ButtonType::Primary);
        assert!(spec.danger);
    }

    #[test]
    fn long_text_icon_is_diagnosed() {
        let diagnostics = CollectingDiagnostics::new();
        let short = ButtonProps::new().with_icon(Icon::Text("ab".into()));
        let long = ButtonProps::new().with_icon(Icon::Text("abc".into()));

        let short_spec = resolve(&short, &Scopes::root(), &diagnostics);
        assert!(diagnostics.take().is_empty());

        let long_spec = resolve(&long, &Scopes::root(), &diagnostics);
        let reported = diagnostics.take();
        assert_eq!(reported.len(), 1);
        assert_eq!(reported[0].component, "Button");
        assert!(reported[0].message.contains("abc"));
        assert_eq!(long_spec.icon, Some(Icon::Text("abc".into())));
        assert_eq!(short_spec.size, long_spec.size);
    }

    #[test]
    fn ghost_link_is_diagnosed() {
        let diagnostics = CollectingDiagnostics::new();
        for button_type in [ButtonType::Link, ButtonType::Text] {
            let props = ButtonProps::new().with_type(button_type).with_ghost(true);
            assert!(resolve(&props, &Scopes::root(), &diagnostics).ghost);
        }
        assert_eq!(diagnostics.take().len(), 2);

        let props = ButtonProps::new()
            .with_type(ButtonType::Primary)
            .with_ghost(true);
        resolve(&props, &Scopes::root(), &diagnostics);
        assert!(diagnostics.take().is_empty());
    }

    #[test]
    fn two_cjk_chars_spacing_conditions() {
        let label = || ButtonProps::new().with_child(Child::text("按钮"));
        let root = Scopes::root();

        let spec = resolve_quiet(&label(), &root);
        assert!(spec.two_cjk_chars);
        assert_eq!(spec.children, vec![Child::text("按 钮")]);

        let with_icon = label().with_icon(Icon::Glyph("search".into()));
        assert!(!resolve_quiet(&with_icon, &root).two_cjk_chars);

        let link = label().with_type(ButtonType::Link);
        assert_eq!(resolve_quiet(&link, &root).children, vec![Child::text("按钮")]);

        let two_children = label().with_child(Child::Node(NodeId(1)));
        assert!(!resolve_quiet(&two_children, &root).two_cjk_chars);

        let off = ConfigProvider::new()
            .with_auto_insert_space(false)
            .apply(&root);
        assert!(!resolve_quiet(&label(), &off).two_cjk_chars);
    }

    #[test]
    fn forwards_attrs_and_class() {
        let props = ButtonProps::new()
            .with_class_name("extra")
            .with_attr("aria-label", "save");
        let spec = resolve_quiet(&props, &Scopes::root());
        assert_eq!(spec.class_name.as_deref(), Some("extra"));
        assert_eq!(spec.attrs.get("aria-label").map(String::as_str), Some("save"));
    }
}
