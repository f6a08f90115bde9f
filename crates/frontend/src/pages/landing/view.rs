use contracts::usecases::u601_generate_preview::PreviewResult;
use leptos::prelude::*;
use thaw::*;

use super::pricing::PricingSection;
use super::state::FormState;
use super::view_model::LandingVm;
use crate::layout::NotificationService;
use crate::shared::components::ui::{Input, Textarea};
use crate::shared::icons::{icon, icon_sized};

const TELEGRAM_BOT: &str = "@Aks1k_bot";
const TELEGRAM_URL: &str = "https://t.me/Aks1k_bot";

#[component]
pub fn LandingPage() -> impl IntoView {
    let notifications = use_context::<NotificationService>().expect("NotificationService not provided in context");
    let vm = LandingVm::new(notifications);

    view! {
        <div class="landing">
            <Hero />
            <GeneratorCard vm=vm />
            <ResultCard vm=vm />
            <PricingSection />
            <ContactCard vm=vm />
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="landing__hero">
            <div class="landing__hero-icon">{icon_sized("image", 48)}</div>
            <h1 class="landing__hero-title">"Генератор Превью"</h1>
            <p class="landing__hero-text">
                "Создавайте крутые превью для YouTube в стиле Minecraft! ИИ найдёт похожие видео и сделает уникальный дизайн"
            </p>
        </section>
    }
}

#[component]
fn GeneratorCard(vm: LandingVm) -> impl IntoView {
    let in_flight = vm.in_flight();
    let file_name = vm.selected_file_name();
    let image_loading = vm.image_loading();

    view! {
        <section id="generator" class="landing__section">
            <div class="card">
                <h2 class="card__title">"Создать Превью"</h2>
                <p class="card__description">
                    "Загрузите фото и заполните поля — ИИ создаст превью как у топовых видео"
                </p>

                <div class="form__group">
                    <span class="form__label">"Загрузить фото"</span>
                    <input
                        id="image-upload"
                        class="upload__input"
                        type="file"
                        accept="image/*"
                        on:change=move |ev| {
                            let input = event_target::<web_sys::HtmlInputElement>(&ev);
                            vm.select_file(input.files().and_then(|files| files.get(0)));
                        }
                    />
                    <label for="image-upload" class="upload">
                        {move || match file_name.get() {
                            Some(name) => view! {
                                <div class="upload__chosen">
                                    {icon_sized("check-circle", 48)}
                                    <p>{name}</p>
                                </div>
                            }.into_any(),
                            None if image_loading.get() => view! {
                                <div class="upload__empty">
                                    <p>"Чтение файла..."</p>
                                </div>
                            }.into_any(),
                            None => view! {
                                <div class="upload__empty">
                                    {icon_sized("upload", 48)}
                                    <p>"Нажмите для загрузки"</p>
                                </div>
                            }.into_any(),
                        }}
                    </label>
                </div>

                <Input
                    label="Название видео"
                    id="preview-title"
                    value=vm.field(|f: &FormState| f.title.clone())
                    on_input=vm.setter(|f: &mut FormState, v| f.title = v)
                    placeholder="Например: КАК ПОСТРОИТЬ ДОМ В МАЙНКРАФТ"
                />
                <Textarea
                    label="Тема видео"
                    id="preview-theme"
                    value=vm.field(|f: &FormState| f.theme.clone())
                    on_input=vm.setter(|f: &mut FormState, v| f.theme = v)
                    placeholder="Опишите тему: выживание, строительство, PvP..."
                    rows=3
                />
                <Input
                    label="Стиль превью"
                    id="preview-style"
                    value=vm.field(|f: &FormState| f.style.clone())
                    on_input=vm.setter(|f: &mut FormState, v| f.style = v)
                    placeholder="Например: яркий, драматичный, мемный"
                />

                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.generate()
                    disabled=Signal::derive(move || in_flight.get() || image_loading.get())
                >
                    {icon("sparkles")}
                    {move || if in_flight.get() { "Создаём превью..." } else { "Создать Превью" }}
                </Button>
            </div>
        </section>
    }
}

#[component]
fn ResultCard(vm: LandingVm) -> impl IntoView {
    let preview = vm.preview();

    view! {
        {move || preview.get().map(|result| view! { <PreviewDetails result=result /> })}
    }
}

#[component]
fn PreviewDetails(result: PreviewResult) -> impl IntoView {
    let analysis = result.analysis;

    view! {
        <section class="landing__section">
            <div class="card result-card">
                <h2 class="card__title">{result.title.clone()}</h2>
                <img class="result-card__image" src=result.image_url alt=result.title />

                <h3 class="result-card__heading">"Похожие видео"</h3>
                <ul class="result-card__videos">
                    {analysis
                        .similar_videos
                        .into_iter()
                        .map(|video| view! {
                            <li>
                                <span class="result-card__video-title">{video.title}</span>
                                <span class="result-card__views">{format!("{} просмотров", video.view_count)}</span>
                            </li>
                        })
                        .collect_view()}
                </ul>

                <h3 class="result-card__heading">"Цветовая палитра"</h3>
                <div class="result-card__palette">
                    {analysis
                        .color_palette
                        .into_iter()
                        .map(|color| view! {
                            <span
                                class="result-card__swatch"
                                style=format!("background: {};", color)
                                title=color
                            ></span>
                        })
                        .collect_view()}
                </div>

                <h3 class="result-card__heading">"Рекомендуемый стиль"</h3>
                <p>{analysis.recommended_style}</p>

                <h3 class="result-card__heading">"Шрифты"</h3>
                <p>{analysis.font_suggestions.join(", ")}</p>
            </div>
        </section>
    }
}

#[component]
fn ContactCard(vm: LandingVm) -> impl IntoView {
    let in_flight = vm.in_flight();

    view! {
        <section id="contact" class="landing__section">
            <div class="card">
                <div class="card__icon">{icon_sized("message", 32)}</div>
                <h2 class="card__title">"Связаться с нами"</h2>
                <p class="card__description">"Остались вопросы? Напишите нам в Telegram"</p>

                <Input
                    label="Ваше имя"
                    id="contact-name"
                    value=vm.field(|f: &FormState| f.contact_name.clone())
                    on_input=vm.setter(|f: &mut FormState, v| f.contact_name = v)
                    placeholder="Введите имя"
                />
                <Textarea
                    label="Сообщение"
                    id="contact-message"
                    value=vm.field(|f: &FormState| f.contact_message.clone())
                    on_input=vm.setter(|f: &mut FormState, v| f.contact_message = v)
                    placeholder="Ваш вопрос или предложение"
                />

                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.send_contact()
                    disabled=in_flight
                >
                    {icon("send")}
                    {move || if in_flight.get() { "Отправка..." } else { "Отправить в Telegram" }}
                </Button>

                <p class="card__hint">
                    "Или напишите напрямую: "
                    <a href=TELEGRAM_URL target="_blank" rel="noopener noreferrer">{TELEGRAM_BOT}</a>
                </p>
            </div>
        </section>
    }
}
