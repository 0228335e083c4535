use crate::shared::components::form_fields::{
    optional_text, CategorySelect, CheckboxField, NumberField, PlaceSelect, TextAreaField, TextField,
};
use crate::shared::components::form_shell::FormShell;
use crate::shared::components::image_manager::ImageManager;
use crate::shared::crud::{DetailsViewModel, FormContext};
use crate::shared::toast::ToastService;
use contracts::domain::a006_restaurant::aggregate::Restaurant;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn RestaurantDetails(ctx: FormContext) -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let vm = DetailsViewModel::<Restaurant>::new(&ctx, toasts);
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
                    label="Tên nhà hàng"
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
                <TextField
                    label="Ẩm thực"
                    required=true
                    placeholder="Món Việt, hải sản..."
                    value=Signal::derive(move || vm.form.with(|f| f.cuisine.clone()))
                    on_input=Callback::new(move |v| vm.form.update(|f| f.cuisine = v))
                    disabled=locked
                />
                <TextField
                    label="Giờ mở cửa"
                    placeholder="07:00 - 22:00"
                    value=Signal::derive(move || vm.form.with(|f| f.opening_hours.clone().unwrap_or_default()))
                    on_input=Callback::new(move |v| vm.form.update(|f| f.opening_hours = optional_text(v)))
                    disabled=locked
                />
            </div>
            <div class="form__row">
                <TextField
                    label="Địa chỉ"
                    required=true
                    value=Signal::derive(move || vm.form.with(|f| f.address.clone()))
                    on_input=Callback::new(move |v| vm.form.update(|f| f.address = v))
                    disabled=locked
                />
                <TextField
                    label="Điện thoại"
                    value=Signal::derive(move || vm.form.with(|f| f.phone.clone().unwrap_or_default()))
                    on_input=Callback::new(move |v| vm.form.update(|f| f.phone = optional_text(v)))
                    disabled=locked
                />
            </div>
            <div class="form__row">
                <NumberField
                    label="Giá từ (VND)"
                    required=true
                    step="1000"
                    value=Signal::derive(move || vm.form.with(|f| Some(f.min_price)))
                    on_input=Callback::new(move |v: Option<f64>| vm.form.update(|f| f.min_price = v.unwrap_or(0.0)))
                    disabled=locked
                />
                <NumberField
                    label="Giá đến (VND)"
                    required=true
                    step="1000"
                    value=Signal::derive(move || vm.form.with(|f| Some(f.max_price)))
                    on_input=Callback::new(move |v: Option<f64>| vm.form.update(|f| f.max_price = v.unwrap_or(0.0)))
                    disabled=locked
                />
            </div>
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
