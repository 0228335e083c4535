use crate::shared::components::form_fields::{
    CategorySelect, CheckboxField, DateTimeField, PlaceSelect, TextAreaField, TextField,
};
use crate::shared::components::form_shell::FormShell;
use crate::shared::components::image_manager::ImageManager;
use crate::shared::crud::{DetailsViewModel, FormContext};
use crate::shared::toast::ToastService;
use contracts::domain::a003_event::aggregate::Event;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn EventDetails(ctx: FormContext) -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let vm = DetailsViewModel::<Event>::new(&ctx, toasts);
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
            <div class="form__row">
                <TextField
                    label="Tên sự kiện"
                    required=true
                    value=Signal::derive(move || vm.form.with(|f| f.title.clone()))
                    on_input=Callback::new(move |v: String| vm.form.update(|f| {
                        vm.autofill_slug(&v, &mut f.slug);
                        f.title = v;
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
            </div>
            <div class="form__row">
                <CategorySelect
                    required=true
                    categories=vm.categories
                    value=Signal::derive(move || vm.form.with(|f| f.category_id))
                    on_change=Callback::new(move |id| vm.form.update(|f| f.category_id = id))
                    disabled=locked
                />
                <PlaceSelect
                    value=Signal::derive(move || vm.form.with(|f| f.place_id))
                    on_change=Callback::new(move |id| vm.form.update(|f| f.place_id = id))
                    disabled=locked
                />
            </div>
            <div class="form__row">
                <DateTimeField
                    label="Bắt đầu"
                    required=true
                    value=Signal::derive(move || vm.form.with(|f| f.start_time))
                    on_change=Callback::new(move |v| vm.form.update(|f| f.start_time = v))
                    disabled=locked
                />
                <DateTimeField
                    label="Kết thúc"
                    required=true
                    value=Signal::derive(move || vm.form.with(|f| f.end_time))
                    on_change=Callback::new(move |v| vm.form.update(|f| f.end_time = v))
                    disabled=locked
                />
            </div>
            <TextField
                label="Địa điểm tổ chức"
                required=true
                value=Signal::derive(move || vm.form.with(|f| f.location.clone()))
                on_input=Callback::new(move |v| vm.form.update(|f| f.location = v))
                disabled=locked
            />
            <TextAreaField
                label="Mô tả ngắn"
                required=true
                rows=2
                value=Signal::derive(move || vm.form.with(|f| f.summary.clone()))
                on_input=Callback::new(move |v| vm.form.update(|f| f.summary = v))
                disabled=locked
            />
            <TextAreaField
                label="Nội dung"
                rows=8
                value=Signal::derive(move || vm.form.with(|f| f.content.clone()))
                on_input=Callback::new(move |v| vm.form.update(|f| f.content = v))
                disabled=locked
            />
            <CheckboxField
                label="Hiển thị công khai"
                checked=Signal::derive(move || vm.form.with(|f| f.is_published))
                on_change=Callback::new(move |v| vm.form.update(|f| f.is_published = v))
                disabled=locked
            />
            <ImageManager images=vm.images disabled=locked />
        </FormShell>
    }
}
