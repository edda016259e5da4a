use contracts::enums::{Department, Role};
use contracts::system::users::User;
use leptos::prelude::*;
use thaw::*;

use super::view_model::{department_options, role_options, CreateUserViewModel, EditUserViewModel};
use crate::shared::components::form_field::{CheckboxField, FormField, SelectInput};
use crate::shared::form_state::{optional_text, FormMode};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::system::auth::context::{current_user, use_auth};

#[component]
fn FormFooter(
    #[prop(into)] saving: Signal<bool>,
    on_save: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <Button
            appearance=ButtonAppearance::Secondary
            on_click=move |_| on_close.run(())
            disabled=saving
        >
            "Cancel"
        </Button>
        <Button
            appearance=ButtonAppearance::Primary
            on_click=move |_| on_save.run(())
            disabled=saving
        >
            {icon("save")}
            {move || if saving.get() { " Saving..." } else { " Save" }}
        </Button>
    }
}

#[component]
pub fn UserDetails(mode: FormMode<User>, on_saved: Callback<()>, on_close: Callback<()>) -> impl IntoView {
    match mode {
        FormMode::Create => view! { <CreateUserForm on_saved=on_saved on_close=on_close /> }.into_any(),
        FormMode::Edit(user) => {
            view! { <EditUserForm user=user on_saved=on_saved on_close=on_close /> }.into_any()
        }
    }
}

#[component]
fn CreateUserForm(on_saved: Callback<()>, on_close: Callback<()>) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let actor = current_user(auth_state);
    let vm = CreateUserViewModel::new(actor.as_ref());
    let state = vm.state;
    let saving = Signal::derive(move || state.saving.get());
    let roles = role_options(actor.as_ref());

    let on_save = Callback::new(move |_| vm.save_command(on_saved));
    let footer = move || view! { <FormFooter saving=saving on_save=on_save on_close=on_close /> };

    view! {
        <Modal title="New user" on_close=on_close footer=footer>
            <div class="details-form">
                <div class="form__row">
                    <FormField label="Username" required=true error=state.error("username")>
                        <input
                            type="text"
                            class="form__input"
                            autocomplete="off"
                            prop:value=move || state.form.with(|f| f.username.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                state.update("username", |f| f.username = value);
                            }
                            disabled=move || saving.get()
                        />
                    </FormField>

                    <FormField label="Password" required=true error=state.error("password")>
                        <input
                            type="password"
                            class="form__input"
                            autocomplete="new-password"
                            prop:value=move || state.form.with(|f| f.password.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                state.update("password", |f| f.password = value);
                            }
                            disabled=move || saving.get()
                        />
                    </FormField>
                </div>

                <div class="form__row">
                    <FormField label="Full name" error=state.error("full_name")>
                        <input
                            type="text"
                            class="form__input"
                            prop:value=move || state.form.with(|f| f.full_name.clone().unwrap_or_default())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                state.update("full_name", |f| f.full_name = optional_text(value));
                            }
                            disabled=move || saving.get()
                        />
                    </FormField>

                    <FormField label="Email" error=state.error("email")>
                        <input
                            type="email"
                            class="form__input"
                            prop:value=move || state.form.with(|f| f.email.clone().unwrap_or_default())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                state.update("email", |f| f.email = optional_text(value));
                            }
                            disabled=move || saving.get()
                        />
                    </FormField>
                </div>

                <div class="form__row">
                    <FormField label="Role" error=state.error("role")>
                        <SelectInput
                            value=Signal::derive(move || state.form.with(|f| f.role.code().to_string()))
                            on_change=Callback::new(move |code: String| {
                                if let Some(role) = Role::from_code(&code) {
                                    state.update("role", |f| f.role = role);
                                }
                            })
                            options=roles
                            disabled=saving
                        />
                    </FormField>

                    <FormField label="Department" required=true error=state.error("department")>
                        <SelectInput
                            value=Signal::derive(move || {
                                state.form.with(|f| f.department.map(|d| d.code().to_string()).unwrap_or_default())
                            })
                            on_change=Callback::new(move |code: String| {
                                state.update("department", |f| f.department = Department::from_code(&code));
                            })
                            options=department_options()
                            placeholder="Select department"
                            disabled=saving
                        />
                    </FormField>
                </div>
            </div>
        </Modal>
    }
}

#[component]
fn EditUserForm(user: User, on_saved: Callback<()>, on_close: Callback<()>) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let actor = current_user(auth_state);
    let vm = EditUserViewModel::new(&user, actor.as_ref());
    let state = vm.state;
    let saving = Signal::derive(move || state.saving.get());
    let is_self = vm.is_self;
    let locked = Signal::derive(move || saving.get() || is_self);

    // Текущая роль остаётся в списке, даже если выше роли редактора
    let mut roles = role_options(actor.as_ref());
    if !roles.iter().any(|(code, _)| code == user.role.code()) {
        roles.push((user.role.code().to_string(), user.role.display_name().to_string()));
    }

    let title = format!("Edit user {}", vm.username);
    let on_save = Callback::new(move |_| vm.save_command(on_saved));
    let footer = move || view! { <FormFooter saving=saving on_save=on_save on_close=on_close /> };

    view! {
        <Modal title=title on_close=on_close footer=footer>
            <div class="details-form">
                <div class="form__row">
                    <FormField label="Full name" error=state.error("full_name")>
                        <input
                            type="text"
                            class="form__input"
                            prop:value=move || state.form.with(|f| f.full_name.clone().unwrap_or_default())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                state.update("full_name", |f| f.full_name = optional_text(value));
                            }
                            disabled=move || saving.get()
                        />
                    </FormField>

                    <FormField label="Email" error=state.error("email")>
                        <input
                            type="email"
                            class="form__input"
                            prop:value=move || state.form.with(|f| f.email.clone().unwrap_or_default())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                state.update("email", |f| f.email = optional_text(value));
                            }
                            disabled=move || saving.get()
                        />
                    </FormField>
                </div>

                <div class="form__row">
                    <FormField label="Role" error=state.error("role")>
                        <SelectInput
                            value=Signal::derive(move || state.form.with(|f| f.role.code().to_string()))
                            on_change=Callback::new(move |code: String| {
                                if let Some(role) = Role::from_code(&code) {
                                    state.update("role", |f| f.role = role);
                                }
                            })
                            options=roles
                            disabled=locked
                        />
                    </FormField>

                    <FormField label="Department" required=true error=state.error("department")>
                        <SelectInput
                            value=Signal::derive(move || state.form.with(|f| f.department.code().to_string()))
                            on_change=Callback::new(move |code: String| {
                                if let Some(department) = Department::from_code(&code) {
                                    state.update("department", |f| f.department = department);
                                }
                            })
                            options=department_options()
                            disabled=saving
                        />
                    </FormField>
                </div>

                <FormField label="New password" error=state.error("password")>
                    <input
                        type="password"
                        class="form__input"
                        autocomplete="new-password"
                        placeholder="Leave empty to keep the current password"
                        prop:value=move || state.form.with(|f| f.password.clone().unwrap_or_default())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update("password", |f| f.password = optional_text(value));
                        }
                        disabled=move || saving.get()
                    />
                </FormField>

                <CheckboxField
                    label="Active"
                    checked=Signal::derive(move || state.form.with(|f| f.is_active))
                    on_change=Callback::new(move |checked: bool| {
                        state.update("is_active", |f| f.is_active = checked);
                    })
                    disabled=locked
                />
            </div>
        </Modal>
    }
}
