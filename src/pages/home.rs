//! The single page: hero, about, services, tech, team, partners,
//! testimonials and the contact footer, plus the three modals.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, KeyboardEvent};
use yew::prelude::*;

use crate::components::buttons::{ActionButton, PrimaryButton, SecondaryButton};
use crate::components::modal::Modal;
use crate::components::scroll_reveal::{RevealVariant, ScrollReveal};
use crate::components::section::{BentoCard, SectionTitle};
use crate::components::team_carousel::TeamCarousel;
use crate::components::testimonial_carousel::TestimonialCarousel;
use crate::components::video_carousel::VideoCarousel;
use crate::config;
use crate::content::{self, TeamMember};
use crate::utils::notify::{brief_message, lead_message, notify, LeadRequest, PlatesBrief};
use crate::utils::phone;

#[derive(Clone, PartialEq)]
struct SubmitStatus {
    success: bool,
    message: String,
}

fn brief_text_input(
    brief: &UseStateHandle<PlatesBrief>,
    apply: fn(&mut PlatesBrief, String),
) -> Callback<InputEvent> {
    let brief = brief.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*brief).clone();
        apply(&mut next, input.value());
        brief.set(next);
    })
}

fn brief_select(
    brief: &UseStateHandle<PlatesBrief>,
    apply: fn(&mut PlatesBrief, String),
) -> Callback<Event> {
    let brief = brief.clone();
    Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        let mut next = (*brief).clone();
        apply(&mut next, select.value());
        brief.set(next);
    })
}

fn brief_textarea(
    brief: &UseStateHandle<PlatesBrief>,
    apply: fn(&mut PlatesBrief, String),
) -> Callback<InputEvent> {
    let brief = brief.clone();
    Callback::from(move |e: InputEvent| {
        let area: HtmlTextAreaElement = e.target_unchecked_into();
        let mut next = (*brief).clone();
        apply(&mut next, area.value());
        brief.set(next);
    })
}

fn select_field(label: &str, current: &str, options: &[&str], onchange: Callback<Event>) -> Html {
    html! {
        <div class="form-field">
            <label>{ label }</label>
            <select onchange={onchange}>
                {
                    for options.iter().map(|option| html! {
                        <option value={option.to_string()} selected={*option == current}>
                            { option }
                        </option>
                    })
                }
            </select>
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let scrolled = use_state(|| false);
    let is_menu_open = use_state(|| false);
    let active_member = use_state(|| None::<TeamMember>);
    let is_plates_open = use_state(|| false);
    let is_privacy_open = use_state(|| false);
    let current_plate = use_state(|| 0usize);

    // Lead form.
    let name = use_state(String::new);
    let phone_value = use_state(String::new);
    let phone_error = use_state(String::new);
    let project = use_state(String::new);
    let submitting = use_state(|| false);
    let submit_status = use_state(|| None::<SubmitStatus>);

    // Plates brief form.
    let brief = use_state(PlatesBrief::default);
    let brief_submitting = use_state(|| false);
    let brief_status = use_state(|| None::<SubmitStatus>);

    // Sticky-nav dim, driven by the window scroll position.
    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let scrolled = scrolled.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(y) = win.scroll_y() {
                                    scrolled.set(y > 50.0);
                                }
                            }
                        }
                    });
                    window
                        .add_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        )
                        .ok();
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            )
                            .ok();
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    // Escape closes whichever overlay is open.
    {
        let is_menu_open = is_menu_open.clone();
        let active_member = active_member.clone();
        let is_plates_open = is_plates_open.clone();
        let is_privacy_open = is_privacy_open.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                        if e.key() == "Escape" {
                            is_menu_open.set(false);
                            active_member.set(None);
                            is_plates_open.set(false);
                            is_privacy_open.set(false);
                        }
                    });
                    window
                        .add_event_listener_with_callback(
                            "keydown",
                            callback.as_ref().unchecked_ref(),
                        )
                        .ok();
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            win.remove_event_listener_with_callback(
                                "keydown",
                                callback.as_ref().unchecked_ref(),
                            )
                            .ok();
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    let on_phone_input = {
        let phone_value = phone_value.clone();
        let phone_error = phone_error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let formatted = phone::format_phone(&input.value());
            let digits = phone::phone_digits(&formatted);
            phone_value.set(formatted);
            if digits.len() == 11 || digits.is_empty() {
                phone_error.set(String::new());
            } else {
                phone_error.set("Please enter the full phone number".to_string());
            }
        })
    };
    let on_phone_focus = {
        let phone_value = phone_value.clone();
        Callback::from(move |_: FocusEvent| {
            phone_value.set(phone::value_on_focus(&phone_value));
        })
    };
    let on_phone_blur = {
        let phone_value = phone_value.clone();
        let phone_error = phone_error.clone();
        Callback::from(move |_: FocusEvent| {
            let next = phone::value_on_blur(&phone_value);
            if next.is_empty() {
                phone_error.set(String::new());
            }
            phone_value.set(next);
        })
    };

    let on_lead_submit = {
        let name = name.clone();
        let phone_value = phone_value.clone();
        let project = project.clone();
        let submitting = submitting.clone();
        let submit_status = submit_status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if name.trim().is_empty() {
                submit_status.set(Some(SubmitStatus {
                    success: false,
                    message: "Please tell us your name".to_string(),
                }));
                return;
            }
            if !phone::is_complete_phone(&phone_value) {
                submit_status.set(Some(SubmitStatus {
                    success: false,
                    message: "Please enter a valid phone number".to_string(),
                }));
                return;
            }
            if project.trim().is_empty() {
                submit_status.set(Some(SubmitStatus {
                    success: false,
                    message: "Please tell us about the project".to_string(),
                }));
                return;
            }

            submitting.set(true);
            submit_status.set(None);

            let message = lead_message(&LeadRequest {
                name: (*name).clone(),
                phone: (*phone_value).clone(),
                project: (*project).clone(),
            });

            let name = name.clone();
            let phone_value = phone_value.clone();
            let project = project.clone();
            let submitting = submitting.clone();
            let submit_status = submit_status.clone();
            spawn_local(async move {
                match notify(&message).await {
                    Ok(()) => {
                        submit_status.set(Some(SubmitStatus {
                            success: true,
                            message: "Sent! We will get back to you shortly.".to_string(),
                        }));
                        name.set(String::new());
                        phone_value.set(String::new());
                        project.set(String::new());
                    }
                    Err(e) => {
                        log::error!("lead relay failed: {}", e);
                        submit_status.set(Some(SubmitStatus {
                            success: false,
                            message: "Sending failed. Please call us directly.".to_string(),
                        }));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let on_brief_submit = {
        let brief = brief.clone();
        let brief_submitting = brief_submitting.clone();
        let brief_status = brief_status.clone();
        let is_plates_open = is_plates_open.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if brief.contact_name.trim().is_empty() || brief.contact_info.trim().is_empty() {
                brief_status.set(Some(SubmitStatus {
                    success: false,
                    message: "Please fill in the contact fields".to_string(),
                }));
                return;
            }

            brief_submitting.set(true);
            brief_status.set(None);

            let message = brief_message(&brief);
            let brief = brief.clone();
            let brief_submitting = brief_submitting.clone();
            let brief_status = brief_status.clone();
            let is_plates_open = is_plates_open.clone();
            spawn_local(async move {
                match notify(&message).await {
                    Ok(()) => {
                        brief_status.set(Some(SubmitStatus {
                            success: true,
                            message: "Brief sent! We will be in touch.".to_string(),
                        }));
                        gloo_timers::future::TimeoutFuture::new(2_000).await;
                        is_plates_open.set(false);
                        brief.set(PlatesBrief::default());
                        brief_status.set(None);
                    }
                    Err(e) => {
                        log::error!("brief relay failed: {}", e);
                        brief_status.set(Some(SubmitStatus {
                            success: false,
                            message: "Sending failed. Please call us instead.".to_string(),
                        }));
                    }
                }
                brief_submitting.set(false);
            });
        })
    };

    let services = content::services();
    let plate_count = content::PLATE_VIDEOS.len();

    let plate_prev = {
        let current_plate = current_plate.clone();
        Callback::from(move |_: MouseEvent| {
            let next = if *current_plate == 0 {
                plate_count - 1
            } else {
                *current_plate - 1
            };
            current_plate.set(next);
        })
    };
    let plate_next = {
        let current_plate = current_plate.clone();
        Callback::from(move |_: MouseEvent| {
            current_plate.set((*current_plate + 1) % plate_count);
        })
    };

    let open_plates = {
        let is_plates_open = is_plates_open.clone();
        Callback::from(move |_: MouseEvent| is_plates_open.set(true))
    };
    let open_privacy = {
        let is_privacy_open = is_privacy_open.clone();
        Callback::from(move |_: MouseEvent| is_privacy_open.set(true))
    };
    let toggle_menu = {
        let is_menu_open = is_menu_open.clone();
        Callback::from(move |_: MouseEvent| is_menu_open.set(!*is_menu_open))
    };
    let close_menu = {
        let is_menu_open = is_menu_open.clone();
        Callback::from(move |_: MouseEvent| is_menu_open.set(false))
    };
    let on_member_click = {
        let active_member = active_member.clone();
        Callback::from(move |member: TeamMember| active_member.set(Some(member)))
    };
    let close_member = {
        let active_member = active_member.clone();
        Callback::from(move |_: ()| active_member.set(None))
    };

    let nav_links = [
        ("#about", "About"),
        ("#services", "Services"),
        ("#tech", "Technology"),
        ("#team", "Team"),
    ];

    html! {
        <div class="page">
            // --- Sticky nav ---
            <nav class={classes!("site-nav", (*scrolled).then_some("site-nav-scrolled"))}>
                <a href="#" class="nav-logo">
                    <span class="nav-logo-mark">{ "\u{1F525}" }</span>
                    <span class="nav-logo-text">{ "FIREBIRD" }<span class="accent">{ "FILMS" }</span></span>
                </a>
                <div class="nav-links">
                    { for nav_links.iter().map(|(href, label)| html! {
                        <a href={*href}>{ *label }</a>
                    }) }
                </div>
                <div class="nav-actions">
                    <a href="#contact" class="nav-cta">{ "Get in touch" }</a>
                    <button class="nav-burger" aria-label="Menu" onclick={toggle_menu}>
                        { if *is_menu_open { "\u{2715}" } else { "\u{2630}" } }
                    </button>
                </div>
            </nav>

            if *is_menu_open {
                <div class="mobile-menu">
                    { for nav_links.iter().map(|(href, label)| html! {
                        <a href={*href} onclick={close_menu.clone()}>{ *label }</a>
                    }) }
                </div>
            }

            // --- Hero ---
            <header class="hero">
                <div class="hero-backdrop"></div>
                <div class="hero-content">
                    <h1 class="hero-title">
                        { "FIREBIRD" }<br />
                        <span class="hero-title-gradient">{ "FILMS" }</span>
                    </h1>
                    <p class="hero-subtitle">
                        { "Visual content of any scale and complexity." }<br />
                        <span class="accent">{ "Fire in every frame." }</span>
                    </p>
                    <PrimaryButton text="Watch the showreel" href={content::SHOWREEL_URL} />
                </div>
            </header>

            // --- About (bento grid) ---
            <section id="about" class="section">
                <ScrollReveal>
                    <SectionTitle subtitle="Who we are">
                        { "From feature film to " }<span class="muted">{ "virtual production" }</span>
                    </SectionTitle>
                </ScrollReveal>
                <div class="bento-grid">
                    <ScrollReveal class="bento-span-2">
                        <BentoCard>
                            <h3>{ "20 years on set" }</h3>
                            <p>{ "From intimate interviews to stadium shows, the same craft: a \
                                  classical camera school and complete command of multi-camera \
                                  production." }</p>
                            <div class="bento-watermark">{ "20" }</div>
                        </BentoCard>
                    </ScrollReveal>
                    <ScrollReveal class="bento-span-2" delay={0.08}>
                        <BentoCard>
                            <h3>{ "4K HDR and specialty rigs" }</h3>
                            <p>{ "Advanced equipment for complex staged shots. Every camera move \
                                  is deliberate and the image holds to international standards." }</p>
                        </BentoCard>
                    </ScrollReveal>
                    <ScrollReveal delay={0.16}>
                        <BentoCard>
                            <h3>{ "VR & virtual production" }</h3>
                            <p>{ "Seamless panorama stitching and graphics integration." }</p>
                        </BentoCard>
                    </ScrollReveal>
                    <ScrollReveal delay={0.24}>
                        <BentoCard>
                            <h3>{ "Flexible budgets" }</h3>
                            <p>{ "The kit and the crew are sized to the task. Transparent pricing." }</p>
                        </BentoCard>
                    </ScrollReveal>
                </div>
            </section>

            // --- Approach ---
            <section class="section section-tinted">
                <div class="split">
                    <ScrollReveal variant={RevealVariant::FadeLeft}>
                        <h2 class="split-heading">{ "Big-picture rules, in every project" }</h2>
                    </ScrollReveal>
                    <ScrollReveal variant={RevealVariant::FadeRight}>
                        <p class="split-text">{ "From a script with real dramaturgy to color \
                            graded at feature standards. We do not compromise on image or sound; \
                            every pixel matters." }</p>
                    </ScrollReveal>
                </div>
                <div class="approach-grid">
                    {
                        for [
                            ("An honest estimate", "The final price is fixed after the brief. No hidden charges."),
                            ("Hard deadlines", "The production schedule is in the contract. No delays, no excuses."),
                            ("A crew of experts", "Only seasoned professionals on set."),
                        ]
                        .iter()
                        .enumerate()
                        .map(|(idx, (title, text))| html! {
                            <ScrollReveal delay={idx as f64 * 0.08}>
                                <div class="approach-card">
                                    <div class="approach-index">{ format!("0{}", idx + 1) }</div>
                                    <h4>{ *title }</h4>
                                    <p>{ *text }</p>
                                </div>
                            </ScrollReveal>
                        })
                    }
                </div>
                <ScrollReveal class="centered">
                    <PrimaryButton text="Tell us about your project" href="#contact" />
                </ScrollReveal>
            </section>

            // --- Services ---
            <section id="services" class="section">
                <ScrollReveal>
                    <SectionTitle subtitle="What we do">
                        { "Full-cycle " }<span class="accent">{ "production" }</span>
                    </SectionTitle>
                </ScrollReveal>
                <div class="service-list">
                    {
                        for services.iter().enumerate().map(|(index, service)| {
                            let variant = if index % 2 == 0 {
                                RevealVariant::FadeLeft
                            } else {
                                RevealVariant::FadeRight
                            };
                            html! {
                                <ScrollReveal variant={variant}>
                                    <div class={classes!("service-row", (index % 2 == 1).then_some("service-row-flipped"))}>
                                        <div class="service-text">
                                            <div class="service-index">{ format!("SERVICE #{}", index + 1) }</div>
                                            <h3>{ service.title }</h3>
                                            <blockquote>
                                                { format!("\u{201C}{}\u{201D}", service.quote) }
                                                <footer>{ format!("\u{2014} {}", service.author) }</footer>
                                            </blockquote>
                                            <p>{ service.desc }</p>
                                            <a href="#contact" class="service-link">{ "Discuss a project \u{2192}" }</a>
                                        </div>
                                        <div class="service-media">
                                            <VideoCarousel
                                                videos={service.videos.to_vec()}
                                                service_title={service.title}
                                            />
                                        </div>
                                    </div>
                                </ScrollReveal>
                            }
                        })
                    }
                </div>
            </section>

            // --- Technology ---
            <section id="tech" class="section section-dark">
                <ScrollReveal>
                    <SectionTitle subtitle="Technology">
                        { "Innovation, " }<br />{ "built in-house" }
                    </SectionTitle>
                </ScrollReveal>

                <div class="split tech-block">
                    <ScrollReveal variant={RevealVariant::FadeLeft}>
                        <h3 class="accent">{ "Virtual production & stabilization" }</h3>
                        <p>{ "The best way to shoot backgrounds for CG and VR. Our plate \
                              library and custom rigs make car scenes work at the highest \
                              level." }</p>
                        <ul class="tech-list">
                            <li>{ "The Firebird stabilization rig: 9\u{2013}12 synchronized cameras, 360\u{B0} coverage." }</li>
                            <li>{ "Rigs for any carrier: cars, trains, ships, aircraft." }</li>
                            <li>{ "Pricing that flexes with the task." }</li>
                        </ul>
                    </ScrollReveal>
                    <ScrollReveal variant={RevealVariant::FadeRight}>
                        <div class="tech-media">
                            <iframe
                                src={config::embed_url(content::STABILIZATION_VIDEO_ID)}
                                frameborder="0"
                                allow="autoplay; fullscreen"
                                allowfullscreen={true}
                                title="The Firebird stabilization rig"
                            />
                        </div>
                    </ScrollReveal>
                </div>

                <ScrollReveal variant={RevealVariant::ScaleIn}>
                    <div class="tech-card">
                        <div class="split">
                            <div>
                                <div class="badge badge-blue">{ "Best Startup 2023 award" }</div>
                                <h3>{ "The " }<span class="accent-blue">{ "Nightjar" }</span>{ " rain deflector" }</h3>
                                <p>{ "Rain and snow ruin lenses and cancel shoot days. Our answer: \
                                      a spinning filter at 6000 rpm with a hydrophobic coating \
                                      that sheds water by centrifugal force." }</p>
                                <div class="spec-grid">
                                    <div>{ "\u{2022} 24 V power" }</div>
                                    <div>{ "\u{2022} LEMO 302 connector" }</div>
                                    <div>{ "\u{2022} 82 mm glass" }</div>
                                    <div>{ "\u{2022} All-weather" }</div>
                                </div>
                            </div>
                            <div class="tech-media">
                                <iframe
                                    src={config::embed_url(content::DEFLECTOR_VIDEO_ID)}
                                    frameborder="0"
                                    allow="autoplay; fullscreen"
                                    allowfullscreen={true}
                                    title="The Nightjar rain deflector"
                                />
                            </div>
                        </div>
                    </div>
                </ScrollReveal>

                // Plates showcase with a simple indexed switcher.
                <ScrollReveal>
                    <div class="tech-card plates-card">
                        <div class="split">
                            <div>
                                <div class="badge badge-orange">{ "VR production" }</div>
                                <h3>{ "Plates for " }<span class="accent-orange">{ "virtual production" }</span></h3>
                                <p>{ "A library of ready panoramic background plates for LED \
                                      volumes and green-screen stages." }</p>
                                <div class="spec-grid">
                                    <div>{ "\u{2022} 8K resolution" }</div>
                                    <div>{ "\u{2022} 360\u{B0} panoramas" }</div>
                                    <div>{ "\u{2022} Seamless loops" }</div>
                                    <div>{ "\u{2022} RAW sources" }</div>
                                </div>
                                <div class="cta-row">
                                    <ActionButton text="Order a shoot" onclick={open_plates} />
                                    <SecondaryButton text="Get ready-made plates" href="#contact" />
                                </div>
                            </div>
                            <div>
                                <div class="tech-media plates-player">
                                    <iframe
                                        src={config::embed_url(content::PLATE_VIDEOS[*current_plate].id)}
                                        frameborder="0"
                                        allow="autoplay; fullscreen"
                                        allowfullscreen={true}
                                        title={content::PLATE_VIDEOS[*current_plate].title}
                                    />
                                </div>
                                <div class="plates-nav">
                                    <button class="carousel-nav-button" aria-label="Previous plate" onclick={plate_prev}>{ "\u{2039}" }</button>
                                    <div class="carousel-dots">
                                        {
                                            for (0..plate_count).map(|i| {
                                                let current_plate = current_plate.clone();
                                                let class = if i == *current_plate { "dot dot-active" } else { "dot" };
                                                html! {
                                                    <button
                                                        class={class}
                                                        aria-label={format!("Plate video {}", i + 1)}
                                                        onclick={Callback::from(move |_: MouseEvent| current_plate.set(i))}
                                                    />
                                                }
                                            })
                                        }
                                    </div>
                                    <button class="carousel-nav-button" aria-label="Next plate" onclick={plate_next}>{ "\u{203A}" }</button>
                                </div>
                                <p class="plates-caption">{ content::PLATE_VIDEOS[*current_plate].title }</p>
                            </div>
                        </div>
                    </div>
                </ScrollReveal>
            </section>

            // --- Team ---
            <section id="team" class="section">
                <ScrollReveal>
                    <SectionTitle subtitle="People">
                        { "A crew of " }<span class="accent">{ "experts" }</span>
                    </SectionTitle>
                </ScrollReveal>
                <ScrollReveal>
                    <p class="section-lede">{ "The crew is assembled around the complexity of \
                        your task. The right specialists save a remarkable amount of time and \
                        budget." }</p>
                </ScrollReveal>
                <TeamCarousel members={content::team().to_vec()} on_member_click={on_member_click} />

                if let Some(member) = (*active_member).clone() {
                    <Modal on_close={close_member.clone()} class={classes!("team-modal")}>
                        <div class="team-modal-body">
                            <img src={member.photo} alt={member.name} />
                            <div>
                                <h3>{ member.name }</h3>
                                <p class="team-card-role">{ member.role }</p>
                                <p class="team-bio">{ member.bio }</p>
                                if let Some(url) = member.interview_url {
                                    <a class="btn btn-secondary" href={url} target="_blank" rel="noreferrer">
                                        { "\u{25B6} Watch the interview" }
                                    </a>
                                }
                            </div>
                        </div>
                    </Modal>
                }
            </section>

            // --- Partners marquee ---
            <section class="section section-tinted partners-section">
                <ScrollReveal>
                    <SectionTitle subtitle="Trust">
                        { "Industry leaders " }<span class="accent">{ "work with us" }</span>
                    </SectionTitle>
                </ScrollReveal>
                <div class="marquee">
                    <div class="marquee-strip">
                        // The strip is doubled so the animation loops seamlessly.
                        {
                            for content::partner_logos()
                                .iter()
                                .chain(content::partner_logos().iter())
                                .enumerate()
                                .map(|(i, logo)| html! {
                                    <div class="marquee-item" key={i}>
                                        <img src={logo.clone()} alt="Partner logo" loading="lazy" />
                                    </div>
                                })
                        }
                    </div>
                </div>
            </section>

            // --- Testimonials ---
            <section class="section">
                <ScrollReveal>
                    <SectionTitle subtitle="Testimonials">
                        { "What they say " }<span class="accent">{ "about us" }</span>
                    </SectionTitle>
                </ScrollReveal>
                <TestimonialCarousel testimonials={content::testimonials().to_vec()} />
            </section>

            // --- Contact & footer ---
            <footer id="contact" class="footer">
                <div class="split">
                    <ScrollReveal variant={RevealVariant::FadeLeft}>
                        <h2 class="footer-heading">{ "Let's make something " }<span class="accent">{ "great" }</span>{ "." }</h2>
                        <div class="contact-lines">
                            <p><a href="tel:+79250382525">{ "+7 (925) 038-25-25" }</a></p>
                            <p>{ "hello@firebirdfilms.example" }</p>
                            <p>{ "Moscow, Altufyevskoye highway 3/1" }</p>
                        </div>
                    </ScrollReveal>
                    <ScrollReveal variant={RevealVariant::FadeRight}>
                        <form class="lead-form" onsubmit={on_lead_submit}>
                            <div class="form-field">
                                <label>{ "Your name" }</label>
                                <input
                                    type="text"
                                    value={(*name).clone()}
                                    placeholder="Ivan Ivanov"
                                    oninput={{
                                        let name = name.clone();
                                        Callback::from(move |e: InputEvent| {
                                            let input: HtmlInputElement = e.target_unchecked_into();
                                            name.set(input.value());
                                        })
                                    }}
                                />
                            </div>
                            <div class="form-field">
                                <label>{ "Phone" }</label>
                                <input
                                    type="tel"
                                    class={classes!((!phone_error.is_empty()).then_some("input-error"))}
                                    value={(*phone_value).clone()}
                                    placeholder="+7 (999) 123-45-67"
                                    oninput={on_phone_input}
                                    onfocus={on_phone_focus}
                                    onblur={on_phone_blur}
                                />
                                if !phone_error.is_empty() {
                                    <p class="field-error">{ (*phone_error).clone() }</p>
                                }
                            </div>
                            <div class="form-field">
                                <label>{ "About the project" }</label>
                                <textarea
                                    rows="4"
                                    value={(*project).clone()}
                                    placeholder="Tell us a little about your idea..."
                                    oninput={{
                                        let project = project.clone();
                                        Callback::from(move |e: InputEvent| {
                                            let area: HtmlTextAreaElement = e.target_unchecked_into();
                                            project.set(area.value());
                                        })
                                    }}
                                />
                            </div>
                            if let Some(status) = (*submit_status).clone() {
                                <div class={classes!("form-status", if status.success { "form-status-ok" } else { "form-status-err" })}>
                                    { status.message }
                                </div>
                            }
                            <button type="submit" class="btn btn-primary btn-wide" disabled={*submitting}>
                                { if *submitting { "Sending..." } else { "Send" } }
                            </button>
                            <p class="form-note">
                                { "By submitting you agree to the " }
                                <button type="button" class="link-button" onclick={open_privacy}>
                                    { "privacy policy" }
                                </button>
                            </p>
                        </form>
                    </ScrollReveal>
                </div>
                <div class="footer-bottom">
                    { "\u{A9} 2026 Firebird Films. All rights reserved." }
                </div>
            </footer>

            // --- Plates brief modal ---
            if *is_plates_open {
                <Modal
                    on_close={{
                        let is_plates_open = is_plates_open.clone();
                        Callback::from(move |_: ()| is_plates_open.set(false))
                    }}
                    class={classes!("plates-modal")}
                >
                    <div class="badge badge-orange">{ "Brief" }</div>
                    <h3>{ "Order a background-plates shoot" }</h3>
                    <p class="modal-lede">{ "Fill in the form and we will estimate your request." }</p>

                    <form class="brief-form" onsubmit={on_brief_submit}>
                        <div class="form-row">
                            <div class="form-field">
                                <label>{ "How should we address you? *" }</label>
                                <input
                                    type="text"
                                    required=true
                                    value={brief.contact_name.clone()}
                                    placeholder="Ivan Ivanov"
                                    oninput={brief_text_input(&brief, |b, v| b.contact_name = v)}
                                />
                            </div>
                            <div class="form-field">
                                <label>{ "How do we reach you? *" }</label>
                                <input
                                    type="text"
                                    required=true
                                    value={brief.contact_info.clone()}
                                    placeholder="Messenger, email or phone"
                                    oninput={brief_text_input(&brief, |b, v| b.contact_info = v)}
                                />
                            </div>
                        </div>
                        <div class="form-row">
                            <div class="form-field">
                                <label>{ "Company" }</label>
                                <input
                                    type="text"
                                    value={brief.company.clone()}
                                    placeholder="LLC, sole trader, NGO"
                                    oninput={brief_text_input(&brief, |b, v| b.company = v)}
                                />
                            </div>
                            <div class="form-field">
                                <label>{ "Project name" }</label>
                                <input
                                    type="text"
                                    value={brief.project.clone()}
                                    placeholder="Working title"
                                    oninput={brief_text_input(&brief, |b, v| b.project = v)}
                                />
                            </div>
                        </div>

                        <p class="form-section-label">{ "Shoot parameters" }</p>
                        <div class="form-grid">
                            { select_field("Location", &brief.location,
                                &["Major city", "Small town", "Countryside", "Highway", "Other"],
                                brief_select(&brief, |b, v| b.location = v)) }
                            { select_field("Season", &brief.season,
                                &["Spring", "Summer", "Autumn", "Winter"],
                                brief_select(&brief, |b, v| b.season = v)) }
                            { select_field("Weather", &brief.weather,
                                &["Sunny", "Cloudy", "Overcast", "Rain", "Snow"],
                                brief_select(&brief, |b, v| b.weather = v)) }
                            { select_field("Time of day", &brief.time_of_day,
                                &["Day", "Morning", "Evening", "Night", "Golden hour"],
                                brief_select(&brief, |b, v| b.time_of_day = v)) }
                            { select_field("Cars in frame", &brief.cars_count,
                                &["no cars", "few (1-3)", "some (4-10)", "heavy traffic"],
                                brief_select(&brief, |b, v| b.cars_count = v)) }
                            { select_field("Camera car height", &brief.car_height,
                                &["sedan", "crossover/SUV", "minivan", "truck", "bus"],
                                brief_select(&brief, |b, v| b.car_height = v)) }
                            { select_field("Camera angle", &brief.camera_angle,
                                &["horizon", "upward", "downward", "combined"],
                                brief_select(&brief, |b, v| b.camera_angle = v)) }
                            <div class="form-field">
                                <label>{ "Speed (km/h)" }</label>
                                <input
                                    type="text"
                                    value={brief.speed.clone()}
                                    placeholder="60"
                                    oninput={brief_text_input(&brief, |b, v| b.speed = v)}
                                />
                            </div>
                            <div class="form-field">
                                <label>{ "Total runtime" }</label>
                                <input
                                    type="text"
                                    value={brief.duration.clone()}
                                    placeholder="5 min"
                                    oninput={brief_text_input(&brief, |b, v| b.duration = v)}
                                />
                            </div>
                        </div>

                        <p class="form-section-label">{ "Options" }</p>
                        <div class="form-grid">
                            { select_field("License", &brief.license_type,
                                &["Non-exclusive", "Exclusive"],
                                brief_select(&brief, |b, v| b.license_type = v)) }
                            { select_field("On-set supervision", &brief.supervising,
                                &["yes", "no"],
                                brief_select(&brief, |b, v| b.supervising = v)) }
                            { select_field("Plate stitching", &brief.stitching,
                                &["yes", "no"],
                                brief_select(&brief, |b, v| b.stitching = v)) }
                        </div>

                        <div class="form-field">
                            <label>{ "Notes" }</label>
                            <textarea
                                rows="3"
                                value={brief.notes.clone()}
                                placeholder="Anything you consider important..."
                                oninput={brief_textarea(&brief, |b, v| b.notes = v)}
                            />
                        </div>

                        <p class="form-note">{ "Please be thorough: this form becomes an annex \
                            to the contract." }</p>

                        if let Some(status) = (*brief_status).clone() {
                            <div class={classes!("form-status", if status.success { "form-status-ok" } else { "form-status-err" })}>
                                { status.message }
                            </div>
                        }

                        <button type="submit" class="btn btn-primary btn-wide" disabled={*brief_submitting}>
                            { if *brief_submitting { "Sending..." } else { "Send the brief" } }
                        </button>
                    </form>
                </Modal>
            }

            // --- Privacy policy modal ---
            if *is_privacy_open {
                <Modal
                    on_close={{
                        let is_privacy_open = is_privacy_open.clone();
                        Callback::from(move |_: ()| is_privacy_open.set(false))
                    }}
                    class={classes!("privacy-modal")}
                >
                    <h2>{ "Privacy policy" }</h2>
                    <p class="muted">{ "Last updated: January 2026" }</p>
                    <h3>{ "1. General" }</h3>
                    <p>{ "This policy describes how personal data of visitors of the Firebird \
                          Films site is processed and protected." }</p>
                    <h3>{ "2. What we collect" }</h3>
                    <ul>
                        <li>{ "Name and contact details (phone, email)" }</li>
                        <li>{ "Project information you share through the forms" }</li>
                        <li>{ "Technical data (IP address, browser, visit time)" }</li>
                    </ul>
                    <h3>{ "3. Why we collect it" }</h3>
                    <ul>
                        <li>{ "Contacting you about collaboration" }</li>
                        <li>{ "Preparing commercial proposals" }</li>
                        <li>{ "Improving our services" }</li>
                    </ul>
                    <h3>{ "4. Protection" }</h3>
                    <p>{ "We take the organizational and technical measures required to protect \
                          your data from unauthorized access, alteration, disclosure or \
                          destruction." }</p>
                    <h3>{ "5. Your rights" }</h3>
                    <ul>
                        <li>{ "Request a copy of your personal data" }</li>
                        <li>{ "Demand correction or deletion" }</li>
                        <li>{ "Withdraw consent to processing" }</li>
                    </ul>
                    <h3>{ "6. Contact" }</h3>
                    <p>{ "For anything related to personal data, write to \
                          hello@firebirdfilms.example or call +7 (925) 038-25-25." }</p>
                </Modal>
            }
        </div>
    }
}
