use gpui::{Action, App, Entity, KeyBinding, Menu, MenuItem, SharedString, Window};
use gpui_component::{ActiveTheme as _, ThemeMode, ThemeRegistry, menu::AppMenuBar};

use crate::themes::{SwitchTheme, SwitchThemeMode};

pub const PAGE_CONTEXT: &str = "GalleryPage";

#[derive(Action, Clone, PartialEq, Eq)]
#[action(namespace = image_gallery, no_json)]
pub struct About;

#[derive(Action, Clone, PartialEq, Eq)]
#[action(namespace = image_gallery, no_json)]
pub struct AddImage;

#[derive(Action, Clone, PartialEq, Eq)]
#[action(namespace = image_gallery, no_json)]
pub struct DeleteSelected;

#[derive(Action, Clone, PartialEq, Eq)]
#[action(namespace = image_gallery, no_json)]
pub struct Quit;

pub fn init(
    title: impl Into<SharedString>,
    window: &mut Window,
    cx: &mut App,
) -> Entity<AppMenuBar> {
    cx.on_action(|_: &Quit, cx: &mut App| {
        cx.quit();
    });

    cx.bind_keys([
        #[cfg(target_os = "macos")]
        KeyBinding::new("cmd-n", AddImage, Some(PAGE_CONTEXT)),
        #[cfg(not(target_os = "macos"))]
        KeyBinding::new("ctrl-n", AddImage, Some(PAGE_CONTEXT)),
        #[cfg(target_os = "macos")]
        KeyBinding::new("cmd-backspace", DeleteSelected, Some(PAGE_CONTEXT)),
        KeyBinding::new("delete", DeleteSelected, Some(PAGE_CONTEXT)),
        #[cfg(target_os = "macos")]
        KeyBinding::new("cmd-q", Quit, None),
        #[cfg(not(target_os = "macos"))]
        KeyBinding::new("ctrl-q", Quit, None),
    ]);

    let title: SharedString = title.into();
    update_app_menu(title, cx);
    AppMenuBar::new(window, cx)
}

fn update_app_menu(title: SharedString, cx: &mut App) {
    let mode = cx.theme().mode;
    let light_label: SharedString = if mode.is_dark() {
        "Light".into()
    } else {
        "✓ Light".into()
    };
    let dark_label: SharedString = if mode.is_dark() {
        "✓ Dark".into()
    } else {
        "Dark".into()
    };

    cx.set_menus(vec![
        Menu {
            name: title,
            items: vec![
                MenuItem::action("About", About),
                MenuItem::Separator,
                theme_menu(cx),
                MenuItem::Separator,
                MenuItem::Submenu(Menu {
                    name: "Appearance".into(),
                    items: vec![
                        MenuItem::action(light_label, SwitchThemeMode(ThemeMode::Light)),
                        MenuItem::action(dark_label, SwitchThemeMode(ThemeMode::Dark)),
                    ],
                }),
                MenuItem::Separator,
                MenuItem::action("Quit", Quit),
            ],
        },
        Menu {
            name: "Edit".into(),
            items: vec![
                MenuItem::action("Add Image...", AddImage),
                MenuItem::separator(),
                MenuItem::action("Delete Selected", DeleteSelected),
            ],
        },
    ]);
}

fn theme_menu(cx: &App) -> MenuItem {
    let themes = ThemeRegistry::global(cx).sorted_themes();
    let current_name = cx.theme().theme_name();

    MenuItem::Submenu(Menu {
        name: "Theme".into(),
        items: themes
            .iter()
            .map(|theme| {
                let checked = current_name == &theme.name;
                let label: SharedString = if checked {
                    format!("✓ {}", theme.name).into()
                } else {
                    theme.name.clone()
                };
                MenuItem::action(label, SwitchTheme(theme.name.clone()))
            })
            .collect(),
    })
}
