//! Integration tests for resolution precedence and variant dispatch.

use horizon_cascade_button::prelude::*;
use horizon_cascade_core::scope::{ConfigProvider, SizeType};
use horizon_cascade_core::Scopes;

const SIZES: [Option<SizeType>; 4] = [
    None,
    Some(SizeType::Small),
    Some(SizeType::Middle),
    Some(SizeType::Large),
];

fn resolve_quiet(props: &ButtonProps, scopes: &Scopes) -> ButtonSpec {
    resolve(props, scopes, &CollectingDiagnostics::new())
}

fn props_with_size(size: Option<SizeType>) -> ButtonProps {
    let props = ButtonProps::new();
    match size {
        Some(size) => props.with_size(size),
        None => props,
    }
}

#[test]
fn disabled_is_explicit_or_scope() {
    for explicit in [None, Some(false), Some(true)] {
        for scope in [false, true] {
            let mut props = ButtonProps::new();
            props.disabled = explicit;
            let spec = resolve_quiet(&props, &Scopes::root().with_disabled(scope));
            assert_eq!(spec.disabled, explicit.unwrap_or(scope), "{explicit:?} {scope}");
        }
    }
}

#[test]
fn nested_provider_cannot_enable() {
    let outer = ConfigProvider::new().with_component_disabled(true);
    let inner = ConfigProvider::new().with_component_disabled(false);

    let spec = outer.provide(&Scopes::root(), |scopes| {
        inner.provide(scopes, |scopes| resolve_quiet(&ButtonProps::new(), scopes))
    });
    assert!(spec.disabled);
}

#[test]
fn size_precedence_over_all_tiers() {
    for explicit in SIZES {
        for group in SIZES {
            for ambient in SIZES {
                let scopes = Scopes::root().with_size(ambient).with_group_size(group);
                let spec = resolve_quiet(&props_with_size(explicit), &scopes);

                let expected = explicit.or(group).or(ambient).unwrap_or(SizeType::Middle);
                assert_eq!(spec.size, expected, "{explicit:?} {group:?} {ambient:?}");
            }
        }
    }
}

#[test]
fn group_boundary_sizes_buttons_inside() {
    let scopes = Scopes::root().with_size(Some(SizeType::Large));
    let group = ButtonGroup::new().with_size(SizeType::Small);

    let (inside, explicit) = group.provide(&scopes, |scopes| {
        (
            resolve_quiet(&ButtonProps::new(), scopes).size,
            resolve_quiet(&ButtonProps::new().with_size(SizeType::Middle), scopes).size,
        )
    });
    let outside = resolve_quiet(&ButtonProps::new(), &scopes).size;

    assert_eq!(inside, SizeType::Small);
    assert_eq!(explicit, SizeType::Middle);
    assert_eq!(outside, SizeType::Large);
}

#[test]
fn variant_is_exhaustive_and_exclusive() {
    let cases: [(Option<&str>, bool); 4] = [
        (None, false),
        (Some(""), false),
        (Some("#"), true),
        (Some("https://example.com"), true),
    ];
    for (href, anchor) in cases {
        for html_type in [None, Some(ButtonHtmlType::Submit)] {
            let mut props = ButtonProps::new();
            props.href = href.map(str::to_owned);
            props.html_type = html_type;

            let variant = resolve_quiet(&props, &Scopes::root()).variant;
            assert_eq!(variant.is_anchor(), anchor, "{href:?}");
            assert_ne!(variant.is_anchor(), variant.is_native());
        }
    }
}

#[test]
fn prefix_comes_from_provider() {
    let provider = ConfigProvider::new().with_prefix_cls("acme");
    let (button, group) = provider.provide(&Scopes::root(), |scopes| {
        (
            resolve_quiet(&ButtonProps::new(), scopes).prefix_cls,
            ButtonGroup::new().resolve(scopes).prefix_cls,
        )
    });
    assert_eq!(button, "acme-btn");
    assert_eq!(group, "acme-btn-group");
}
