use alfred_core::{Feedback, Item, ItemIcon};
use navlink_core::{App, DeepLink, TransportMode, build, supported_modes, supports};

use crate::config::RuntimeConfig;
use crate::input::RouteRequest;

const NO_LINKS_TITLE: &str = "No app can open this route";
const NO_LINKS_SUBTITLE: &str = "Try another transport mode or enable more apps in NAVLINK_APPS.";
const OPEN_TITLE_PREFIX: &str = "Open in";
const PLATFORM_NATIVE_SUBTITLE: &str = "Opened through the platform map APIs, not a URL";

pub fn route_feedback(request: &RouteRequest, config: &RuntimeConfig) -> Feedback {
    let mut items = Vec::new();
    let mut unsupported = Vec::new();

    for app in &config.apps {
        match build(*app, request.origin(), &request.destination, request.mode) {
            Some(link) => items.push(link_item(*app, &link, request.mode)),
            None if config.include_unsupported => {
                unsupported.push(
                    Item::new(app.display_name())
                        .with_uid(app.as_str())
                        .with_subtitle(unsupported_reason(*app, request.mode))
                        .with_valid(false),
                );
            }
            None => {}
        }
    }

    if items.is_empty() {
        items.push(
            Item::new(NO_LINKS_TITLE)
                .with_subtitle(NO_LINKS_SUBTITLE)
                .with_valid(false),
        );
    }

    items.extend(unsupported);
    Feedback::new(items)
}

pub fn link_item(app: App, link: &DeepLink, mode: Option<TransportMode>) -> Item {
    let url = link.to_string();
    let item = Item::new(format!("{OPEN_TITLE_PREFIX} {}", app.display_name()))
        .with_uid(app.as_str())
        .with_subtitle(url.clone())
        .with_arg(url)
        .with_valid(true)
        .with_icon(app_icon(app))
        .with_variable("app", app.as_str());

    match mode {
        Some(mode) => item.with_variable("mode", mode.as_str()),
        None => item,
    }
}

pub fn apps_feedback(mode: Option<TransportMode>, config: &RuntimeConfig) -> Feedback {
    let items = config
        .apps
        .iter()
        .map(|app| {
            let usable = supports(*app, mode) && !app.is_platform_native();
            Item::new(app.display_name())
                .with_uid(app.as_str())
                .with_subtitle(app_subtitle(*app, mode))
                .with_arg(app.as_str())
                .with_valid(usable)
                .with_icon(app_icon(*app))
        })
        .collect();

    Feedback::new(items)
}

fn app_icon(app: App) -> ItemIcon {
    ItemIcon::new(format!("assets/icons/{}.png", app.as_str()))
}

/// Why `app` produced no link for `mode`.
pub fn unsupported_reason(app: App, mode: Option<TransportMode>) -> String {
    if app.is_platform_native() && supports(app, mode) {
        return format!(
            "{} is {}",
            app.display_name(),
            lowercase_first(PLATFORM_NATIVE_SUBTITLE)
        );
    }

    match mode {
        Some(mode) => format!("{} does not support {mode} directions", app.display_name()),
        None => format!("{} cannot open this route", app.display_name()),
    }
}

fn app_subtitle(app: App, mode: Option<TransportMode>) -> String {
    if app.is_platform_native() {
        return PLATFORM_NATIVE_SUBTITLE.to_string();
    }

    match mode {
        Some(mode) if supports(app, Some(mode)) => format!("Supports {mode} directions"),
        Some(mode) => format!("No {mode} directions"),
        None => {
            let modes = supported_modes(app)
                .into_iter()
                .map(TransportMode::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            format!("Modes: {modes}")
        }
    }
}

fn lowercase_first(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
