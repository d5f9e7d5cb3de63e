use yew::prelude::*;

use crate::components::faq::Faq;
use crate::components::nav::Nav;
use crate::components::product_filter::ProductFilter;
use crate::components::promo_banner::PromoBanner;
use crate::components::reveal::{Animation, Reveal};
use crate::components::smooth_scroll::anchor_click;
use crate::components::stats_counter::StatsSection;
use crate::components::subscribe_popup::SubscribePopup;
use crate::content::Catalog;

/// Footer link back to the hero section.
const BACK_TO_TOP: &str = "#inicio";

#[function_component(Home)]
pub fn home() -> Html {
    let catalog = use_state(Catalog::embedded);

    html! {
        <div class="storefront">
            <PromoBanner message={catalog.promo.clone()} />
            <Nav />

            <main>
                <section id="inicio" class="hero">
                    <Reveal animation={Animation::FadeInUp} class="hero-content container">
                        <h1>{&catalog.hero.title}</h1>
                        <p class="hero-subtitle">{&catalog.hero.subtitle}</p>
                        <a href="#productos" class="btn btn-primary" onclick={anchor_click("#productos")}>
                            {"Ver productos"}
                        </a>
                    </Reveal>
                </section>

                <section id="productos" class="products container">
                    <Reveal animation={Animation::FadeInUp} class="section-header">
                        <h2>{"Nuestros productos"}</h2>
                        <p>{"Elige una categoría y encuentra tu antojo."}</p>
                    </Reveal>
                    <ProductFilter
                        categories={catalog.categories.clone()}
                        products={catalog.products.clone()}
                    />
                </section>

                <section id="nosotros" class="about container">
                    <Reveal animation={Animation::FadeInLeft} class="about-text">
                        <h2>{"Sobre nosotros"}</h2>
                        <p>{"Somos una pastelería familiar. Horneamos cada día con ingredientes frescos y recetas de la casa."}</p>
                    </Reveal>
                    <Reveal animation={Animation::ScaleIn}>
                        <StatsSection stats={catalog.stats.clone()} />
                    </Reveal>
                </section>

                <section id="faq" class="faq container">
                    <Reveal animation={Animation::FadeInRight} class="section-header">
                        <h2>{"Preguntas frecuentes"}</h2>
                    </Reveal>
                    <Faq entries={catalog.faqs.clone()} />
                </section>

                <section id="contacto" class="contact container">
                    <Reveal animation={Animation::StaggerChildren} class="contact-grid">
                        <div class="contact-item">
                            <h3>{"Dirección"}</h3>
                            <p>{&catalog.contact.address}</p>
                        </div>
                        <div class="contact-item">
                            <h3>{"Horario"}</h3>
                            <p>{&catalog.contact.hours}</p>
                        </div>
                        <div class="contact-item">
                            <h3>{"Teléfono"}</h3>
                            <p>{&catalog.contact.phone}</p>
                        </div>
                    </Reveal>
                </section>
            </main>

            <footer class="footer">
                <Reveal animation={Animation::Reveal} class="container">
                    <p>{"© Pedacitos Pastelería"}</p>
                    <a href={BACK_TO_TOP} onclick={anchor_click(BACK_TO_TOP)}>{"Volver arriba"}</a>
                </Reveal>
            </footer>

            <SubscribePopup />

            <style>
                {r#"
                .header {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 100;
                    background: transparent;
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                }
                .header.scrolled {
                    background: var(--surface);
                    box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08);
                }
                .nav-link.active {
                    color: var(--accent);
                }
                @media (max-width: 768px) {
                    .nav-menu {
                        position: fixed;
                        inset: 64px 0 auto 0;
                        transform: translateY(-120%);
                        transition: transform 0.3s ease;
                    }
                    .nav-menu.active {
                        transform: translateY(0);
                    }
                }
                .fade-in-up, .fade-in-left, .fade-in-right, .scale-in, .reveal {
                    opacity: 0;
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }
                .fade-in-up { transform: translateY(30px); }
                .fade-in-left { transform: translateX(-30px); }
                .fade-in-right { transform: translateX(30px); }
                .scale-in { transform: scale(0.9); }
                .fade-in-up.visible, .fade-in-left.visible, .fade-in-right.visible,
                .scale-in.visible, .reveal.active {
                    opacity: 1;
                    transform: none;
                }
                .stagger-children > * {
                    opacity: 0;
                    transition: opacity 0.5s ease;
                }
                .stagger-children.visible > * { opacity: 1; }
                .product-card {
                    transition: opacity 0.3s ease, transform 0.3s ease;
                }
                .category-btn.active {
                    background: var(--accent);
                    color: #fff;
                }
                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.3s ease;
                }
                .faq-item.active .faq-answer {
                    max-height: 400px;
                }
                .subscribe-popup {
                    position: fixed;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(0, 0, 0, 0.5);
                    opacity: 0;
                    visibility: hidden;
                    transition: opacity 0.3s ease;
                }
                .subscribe-popup.active {
                    opacity: 1;
                    visibility: visible;
                }
                .lazy-image {
                    opacity: 0;
                    transition: opacity 0.4s ease;
                }
                .lazy-image.loaded { opacity: 1; }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::smooth_scroll::anchor_id;

    #[test]
    fn back_to_top_scrolls_to_the_hero() {
        assert_eq!(anchor_id(BACK_TO_TOP), Some("inicio"));
    }
}
