use crate::shared::components::form_fields::{optional_text, TextAreaField, TextField};
use crate::shared::components::form_shell::FormShell;
use crate::shared::crud::{DetailsViewModel, FormContext};
use crate::shared::toast::ToastService;
use contracts::domain::a001_category::aggregate::{Category, CategoryKind};
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn CategoryDetails(ctx: FormContext) -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let vm = DetailsViewModel::<Category>::new(&ctx, toasts);
    vm.load_or_reset();

    let locked = Signal::derive(move || vm.is_locked());

    view! {
        <FormShell
            title=vm.title()
            is_loading=vm.is_loading
            load_error=vm.load_error
            is_busy=Signal::derive(move || vm.is_busy())
            on_save=Callback::new(move |_| vm.save_command(ctx.on_saved))
            on_cancel=ctx.on_cancel
        >
            <TextField
                label="Tên danh mục"
                required=true
                value=Signal::derive(move || vm.form.with(|f| f.name.clone()))
                on_input=Callback::new(move |v: String| vm.form.update(|f| {
                    vm.autofill_slug(&v, &mut f.slug);
                    f.name = v;
                }))
                disabled=locked
            />
            <TextField
                label="Slug"
                required=true
                value=Signal::derive(move || vm.form.with(|f| f.slug.clone()))
                on_input=Callback::new(move |v: String| {
                    vm.mark_slug_touched();
                    vm.form.update(|f| f.slug = v);
                })
                disabled=locked
            />
            <div class="form__group">
                <label class="form__label">"Áp dụng cho"</label>
                <select
                    class="form__select"
                    disabled=move || locked.get()
                    prop:value=move || vm.form.with(|f| f.kind.map(|k| k.as_str()).unwrap_or_default().to_string())
                    on:change=move |ev| {
                        let kind = CategoryKind::from_str_opt(&event_target_value(&ev));
                        vm.form.update(|f| f.kind = kind);
                    }
                >
                    <option value="">"Tất cả nội dung"</option>
                    {CategoryKind::ALL
                        .into_iter()
                        .map(|kind| view! {
                            <option
                                value=kind.as_str()
                                selected=move || vm.form.with(|f| f.kind == Some(kind))
                            >
                                {kind.label()}
                            </option>
                        })
                        .collect_view()}
                </select>
            </div>
            <TextAreaField
                label="Mô tả"
                value=Signal::derive(move || vm.form.with(|f| f.description.clone().unwrap_or_default()))
                on_input=Callback::new(move |v: String| vm.form.update(|f| {
                    f.description = optional_text(v);
                }))
                disabled=locked
            />
        </FormShell>
    }
}
