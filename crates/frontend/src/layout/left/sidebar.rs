//! Sidebar with collapsible menu groups

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (tab key, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    let item = |key: &'static str, icon: &'static str| (key, tab_label_for_key(key), icon);
    vec![
        MenuGroup {
            id: "dashboards",
            label: "Dashboard",
            icon: "bar-chart",
            items: vec![item("d400_school_overview", "bar-chart")],
        },
        MenuGroup {
            id: "academics",
            label: "Academics",
            icon: "book",
            items: vec![
                item("a001_academic_year", "calendar"),
                item("a005_teacher", "users"),
            ],
        },
        MenuGroup {
            id: "admissions",
            label: "Admissions",
            icon: "file-text",
            items: vec![
                item("a002_admission_inquiry", "file-text"),
                item("a002_admission_inquiry_new", "plus"),
            ],
        },
        MenuGroup {
            id: "hostel",
            label: "Hostel",
            icon: "home",
            items: vec![item("a003_room_type", "home")],
        },
        MenuGroup {
            id: "hr",
            label: "Human Resources",
            icon: "briefcase",
            items: vec![
                item("a004_leave_request", "calendar"),
                item("a004_leave_request_new", "plus"),
                item("a005_teacher_new", "user-plus"),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let expanded_groups = RwSignal::new(vec!["dashboards".to_string()]);

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| {
                let group_id = group.id.to_string();
                let group_id_for_click = group_id.clone();
                let group_id_for_exp = group_id.clone();
                let items_stored = StoredValue::new(group.items.clone());

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                let gid = group_id_for_click.clone();
                                expanded_groups.update(move |items| {
                                    if let Some(pos) = items.iter().position(|x| x == &gid) {
                                        items.remove(pos);
                                    } else {
                                        items.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&group_id_for_exp)
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.get().contains(&group_id)>
                            <div class="app-sidebar__children">
                                {items_stored.get_value().into_iter().map(|(key, label, icon_name)| {
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || {
                                                ctx.active.get().as_deref() == Some(key)
                                            }
                                            style:padding-left="10px"
                                            on:click=move |_| ctx.open_tab(key, label)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
