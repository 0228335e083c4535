use crate::shared::components::form_fields::{CategorySelect, CheckboxField, NumberField, TextAreaField, TextField};
use crate::shared::components::form_shell::FormShell;
use crate::shared::components::image_manager::ImageManager;
use crate::shared::crud::{DetailsViewModel, FormContext};
use crate::shared::toast::ToastService;
use contracts::domain::a004_tour::aggregate::Tour;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn TourDetails(ctx: FormContext) -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let vm = DetailsViewModel::<Tour>::new(&ctx, toasts);
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
                    label="Tên tour"
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
            </div>
            <CategorySelect
                required=true
                categories=vm.categories
                value=Signal::derive(move || vm.form.with(|f| f.category_id))
                on_change=Callback::new(move |id| vm.form.update(|f| f.category_id = id))
                disabled=locked
            />
            <div class="form__row">
                <NumberField
                    label="Số ngày"
                    required=true
                    step="1"
                    value=Signal::derive(move || vm.form.with(|f| Some(f.duration_days as f64)))
                    on_input=Callback::new(move |v: Option<f64>| vm.form.update(|f| {
                        f.duration_days = v.map(|d| d.max(0.0) as u32).unwrap_or(0);
                    }))
                    disabled=locked
                />
                <NumberField
                    label="Giá (VND)"
                    required=true
                    step="1000"
                    value=Signal::derive(move || vm.form.with(|f| Some(f.price)))
                    on_input=Callback::new(move |v: Option<f64>| vm.form.update(|f| f.price = v.unwrap_or(0.0)))
                    disabled=locked
                />
            </div>
            <TextField
                label="Điểm khởi hành"
                required=true
                value=Signal::derive(move || vm.form.with(|f| f.departure_point.clone()))
                on_input=Callback::new(move |v| vm.form.update(|f| f.departure_point = v))
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
                label="Lịch trình"
                rows=6
                value=Signal::derive(move || vm.form.with(|f| f.itinerary.clone()))
                on_input=Callback::new(move |v| vm.form.update(|f| f.itinerary = v))
                disabled=locked
            />
            <TextAreaField
                label="Nội dung"
                rows=6
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
