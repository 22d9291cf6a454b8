use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icons::Icon;
use crate::components::logo::OneLogo;
use crate::components::nav::{FloatingContactBtn, SideNav};
use crate::components::revenue_chart::RevenueChart;
use crate::components::slide::Slide;
use crate::data::{REVENUE_SERIES, TEAM_MEMBERS};

#[function_component(HeroSlide)]
fn hero_slide() -> Html {
    html! {
        <Slide id="hero" class="hero">
            <div class="hero-inner">
                <OneLogo class="hero-logo" />
                <h1 class="hero-title">
                    {"SELFWEAR™ for every "}<span class="hero-strong">{"ONE"}</span>
                </h1>
                <div class="scroll-cue">
                    <Icon name="chevron-down" class="scroll-cue-icon" />
                </div>
            </div>
        </Slide>
    }
}

#[function_component(PurposeSlide)]
fn purpose_slide() -> Html {
    html! {
        <Slide id="purpose" class="purpose">
            <div class="purpose-inner">
                <Icon name="quote" class="quote-mark quote-open" />
                <h2 class="purpose-text">
                    {"Our purpose is to help fashion brands create beauty, but "}
                    <span class="accent">{"responsibly"}</span>
                    {" — by knowing exactly what matters most to people and by making specifically that, with "}
                    <span class="accent">{"care"}</span>
                    {" and "}
                    <span class="accent">{"precision"}</span>
                    {"."}
                </h2>
                <Icon name="quote" class="quote-mark quote-close" />
            </div>
        </Slide>
    }
}

#[function_component(ProblemSlide)]
fn problem_slide() -> Html {
    html! {
        <Slide id="problem" class="problem">
            <div class="problem-inner">
                <p class="problem-lede">
                    {"When robots can make anything with AI,"}<br/>
                    {"the fundamental question for a brand becomes:"}
                </p>
                <h2 class="problem-headline">{"What exactly should the brand offer?"}</h2>
                <div class="stat-card">
                    <p>
                        {"Fashion still today produces in the "}<span class="stat-strong">{"dark"}</span>{","}<br/>
                        <span class="stat-soft">{"guessing demand,"}</span><br/>
                        <span class="stat-soft">{"overproducing, discounting,"}</span><br/>
                        {"and "}<span class="stat-strong stat-underline">{"wasting 40%"}</span>{" of all goods made."}
                    </p>
                </div>
            </div>
        </Slide>
    }
}

#[function_component(PlatformSlide)]
fn platform_slide() -> Html {
    html! {
        <Slide id="platform" class="platform">
            <div class="platform-inner">
                <h2 class="platform-heading">
                    {"ONE transforms a loss making supply chain"}<br/>
                    {"to a circular profit-only machinery"}
                </h2>
                <div class="platform-layout">
                    <div class="diagram">
                        <div class="diagram-node node-west">
                            <div class="node-badge"><Icon name="building" class="node-icon" /></div>
                        </div>
                        <div class="diagram-node node-north">
                            <div class="node-badge"><Icon name="factory" class="node-icon" /></div>
                        </div>
                        <div class="diagram-node node-east">
                            <div class="node-badge"><Icon name="users" class="node-icon" /></div>
                        </div>
                        <div class="diagram-node node-south">
                            <div class="node-logo"><OneLogo class="diagram-logo" /></div>
                            <p class="node-caption">
                                {"AI-Augmented"}<br/>{"Computational Design,"}<br/>
                                {"Sales Automation,"}<br/>{"Autonomous Manufacturing"}
                            </p>
                        </div>
                        <svg class="diagram-lines">
                            <defs>
                                <marker id="flow-arrow" markerWidth="14" markerHeight="14" refX="12" refY="7" orient="auto">
                                    <path d="M2,2 L12,7 L2,12" fill="none" stroke="#E30613" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>
                                </marker>
                            </defs>
                            <line x1="15%" y1="40%" x2="43%" y2="20%" stroke="#333" stroke-width="2" />
                            <line x1="15%" y1="40%" x2="43%" y2="20%" stroke="#E30613" stroke-width="2" marker-end="url(#flow-arrow)" stroke-dasharray="5,5" class="flow" />
                            <line x1="57%" y1="20%" x2="85%" y2="40%" stroke="#333" stroke-width="2" />
                            <line x1="57%" y1="20%" x2="85%" y2="40%" stroke="#E30613" stroke-width="2" marker-end="url(#flow-arrow)" stroke-dasharray="5,5" class="flow" />
                            <line x1="15%" y1="60%" x2="43%" y2="78%" stroke="#333" stroke-width="2" />
                            <line x1="15%" y1="60%" x2="43%" y2="78%" stroke="#E30613" stroke-width="2" marker-end="url(#flow-arrow)" stroke-dasharray="5,5" class="flow" />
                            <line x1="57%" y1="78%" x2="85%" y2="60%" stroke="#333" stroke-width="2" />
                            <line x1="57%" y1="78%" x2="85%" y2="60%" stroke="#E30613" stroke-width="2" marker-end="url(#flow-arrow)" stroke-dasharray="5,5" class="flow" />
                        </svg>
                        <div class="diagram-label label-nw">{"Human + Computational"}<br/>{"Design"}</div>
                        <div class="diagram-label label-ne">{"Production, Distribution"}<br/>{"Leadtime"}<br/>{"+ Risk"}</div>
                        <div class="diagram-label label-sw">{"DNA"}<br/>{"Brand Essence"}<br/>{"Pre-training"}</div>
                        <div class="diagram-label label-se">{"Delivery"}</div>
                    </div>
                    <div class="world-legend">
                        <div>
                            <h3 class="legend-title">{"Old World"}</h3>
                            <p class="legend-text muted">
                                {"Risk"}<br/>
                                {"Black-box Demand & Production"}<br/>
                                {"Un-sustainable with Waste"}
                            </p>
                        </div>
                        <div class="legend-divider"></div>
                        <div>
                            <h3 class="legend-title red">{"AI World"}</h3>
                            <p class="legend-text">
                                {"Zero Risk"}<br/>
                                {"Production on demand, pre-paid"}<br/>
                                {"Sustainable, Resilient"}
                            </p>
                        </div>
                    </div>
                </div>
                <div class="platform-footnote">
                    {"* AI – Artificial Intelligence"}<br/>
                    {"(M) – Manufacturing"}
                </div>
            </div>
        </Slide>
    }
}

#[function_component(SolutionSlide)]
fn solution_slide() -> Html {
    html! {
        <Slide id="solution" class="solution">
            <div class="solution-inner">
                <h2 class="solution-heading">
                    {"ONE AI. Discover what to make, then make that"}<br/>
                    <span class="solution-subheading">{"at scale for any individual, anywhere, any time."}</span>
                </h2>
                <div class="pillars">
                    <div class="pillar pillar-discover">
                        <div class="pillar-copy">
                            <h3>{"DISCOVER"}</h3>
                            <p>{"desire, by empowering the individual to personalise product design"}</p>
                        </div>
                        <img src="https://images.unsplash.com/photo-1558769132-cb1aea458c5e?auto=format&fit=crop&w=800&q=80" alt="Fashion sketches" loading="lazy" />
                    </div>
                    <div class="pillar pillar-design">
                        <div class="pillar-copy centered">
                            <h3>{"DESIGN"}</h3>
                            <p>{"precisely to match the person's captured physique, style and purpose"}</p>
                        </div>
                        <img src="https://images.unsplash.com/photo-1550751827-4bd374c3f58b?auto=format&fit=crop&w=800&q=80" alt="3D body scan" loading="lazy" />
                    </div>
                    <div class="pillar pillar-instruct">
                        <div class="pillar-copy right">
                            <h3>{"INSTRUCT"}</h3>
                            <p>{"robots to produce overnight using minimal resources"}</p>
                        </div>
                        <img src="https://images.unsplash.com/photo-1535378620166-273708d44e4c?auto=format&fit=crop&w=800&q=80" alt="Autonomous manufacturing" loading="lazy" />
                    </div>
                </div>
                <div class="selfwear-tagline">
                    <h3>{"SELFWEAR™"}</h3>
                    <p>{"clothes that express you and not the other way around."}</p>
                </div>
            </div>
        </Slide>
    }
}

#[function_component(BenefitsSlide)]
fn benefits_slide() -> Html {
    let rows: [(&str, &str, &str); 5] = [
        ("Unit Price", "arrow-up", "Personalize each product in style, fit and purpose for higher price"),
        ("Volume", "arrow-up", "Add machines to meet growing demand with no investment risk"),
        ("COGS", "arrow-down", "Make only what is sold and eliminate risk and uncertainty"),
        ("Brand Value", "arrow-up", "Speak to every single customer and match brand message"),
        ("Speed", "arrow-up", "Time-to-market is instant with automated robotic manufacturing"),
    ];

    html! {
        <Slide id="benefits" class="benefits">
            <div class="benefits-inner">
                <h2 class="benefits-heading">
                    {"Transformation from "}
                    <span class="push">{"Push"}</span>
                    {" to "}
                    <span class="pull">{"Pull"}</span>
                    {" Manufacturing"}
                </h2>
                <div class="transform-rows">
                    { for rows.iter().map(|(title, arrow, desc)| html! {
                        <div class="transform-row">
                            <div class="row-title">{ *title }</div>
                            <div class="row-arrow"><Icon name={*arrow} class="arrow-icon" /></div>
                            <div class="row-desc">{ *desc }</div>
                        </div>
                    })}
                </div>
            </div>
        </Slide>
    }
}

#[function_component(WhyNowSlide)]
fn why_now_slide() -> Html {
    let cards: [(&str, &str, &str); 4] = [
        ("bot", "AI + Robotics", "Technologies have matured while fashion has remained stagnant. Autonomous manufacturing is now a reality."),
        ("leaf", "Sustainability", "EU DPP and anti-waste laws are forcing the industry to abandon the overproduction model immediately."),
        ("users", "Consumer Demand", "Modern consumers demand individuality. Personalization allows for premium margins and deeper brand loyalty."),
        ("factory", "Micro-Production", "Local production reduces logistics costs, lead times, and carbon emissions, enabling agile response to trends."),
    ];

    html! {
        <Slide id="whynow" class="whynow">
            <div class="whynow-inner">
                <div class="whynow-header">
                    <h2>{"WHY"}<br/><span class="red">{"NOW?"}</span></h2>
                    <p>{"The convergence of technology, legislation, and consumer behavior creates the perfect storm for disruption."}</p>
                </div>
                <div class="why-cards">
                    { for cards.iter().map(|(icon, title, text)| html! {
                        <div class="why-card">
                            <Icon name={*icon} class="why-icon" />
                            <h3>{ *title }</h3>
                            <p>{ *text }</p>
                        </div>
                    })}
                </div>
            </div>
        </Slide>
    }
}

fn cycle_arrows(color: &'static str) -> Html {
    let marker_id = format!("arc-arrow-{}", color.trim_start_matches('#'));
    let marker_end = format!("url(#{})", marker_id);
    html! {
        <svg viewBox="0 0 200 200" class="cycle-arrows">
            <defs>
                <marker id={marker_id.clone()} markerWidth="10" markerHeight="10" refX="6" refY="3" orient="auto" markerUnits="strokeWidth">
                    <path d="M0,0 L0,6 L9,3 z" fill={color} />
                </marker>
            </defs>
            <path d="M 100 20 A 80 80 0 0 1 170 60" fill="none" stroke={color} stroke-width="2" marker-end={marker_end.clone()} />
            <path d="M 180 100 A 80 80 0 0 1 140 170" fill="none" stroke={color} stroke-width="2" marker-end={marker_end.clone()} />
            <path d="M 100 180 A 80 80 0 0 1 30 140" fill="none" stroke={color} stroke-width="2" marker-end={marker_end.clone()} />
            <path d="M 20 100 A 80 80 0 0 1 60 30" fill="none" stroke={color} stroke-width="2" marker-end={marker_end} />
        </svg>
    }
}

#[function_component(PatentSlide)]
fn patent_slide() -> Html {
    html! {
        <Slide id="patent" class="patent">
            <div class="patent-inner">
                <div class="patent-header">
                    <h2>{"Patent protected and market-ready AI system"}</h2>
                    <h3>{"to know humans, machines and fashion"}</h3>
                </div>
                <div class="patent-layout">
                    <div class="cycle-col">
                        <h4>{"Patent in Filing"}</h4>
                        <div class="cycle-box sell-box">
                            <div class="cycle-top">{"Generate"}<br/>{"Design"}</div>
                            <div class="cycle-center">
                                { cycle_arrows("#E30613") }
                                <span class="cycle-word red">{"SELL"}</span>
                            </div>
                            <div class="cycle-bottom">
                                <div>{"Test"}<br/>{"Response"}</div>
                                <div>{"Present"}<br/>{"Product"}</div>
                            </div>
                        </div>
                    </div>
                    <div class="buy-connector">
                        <Icon name="arrow-right" class="buy-arrow" />
                        <span>{"BUY"}</span>
                    </div>
                    <div class="cycle-col">
                        <h4>{"Patent granted in US, EU"}</h4>
                        <div class="cycle-box make-box">
                            <div class="cycle-top">{"Scan"}<br/>{"Body"}</div>
                            <div class="cycle-center">
                                { cycle_arrows("#FFFFFF") }
                                <span class="cycle-word">{"MAKE"}</span>
                            </div>
                            <div class="cycle-bottom">
                                <div>{"Wear"}<br/>{"Clothes"}</div>
                                <div>{"Instruct"}<br/>{"Machines"}</div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </Slide>
    }
}

#[function_component(BusinessModelSlide)]
fn business_model_slide() -> Html {
    html! {
        <Slide id="business-model" class="business-model">
            <div class="model-inner">
                <div class="model-header">
                    <h2>{"The Business Model"}</h2>
                    <h3>
                        {"10% for ONE AI. 20% EBIT boost for Brand."}<br/>
                        <span class="model-sub">{"Sell digital assets and earn with every unit."}</span>
                    </h3>
                </div>
                <div class="model-grid">
                    <div class="model-card one-card">
                        <OneLogo class="model-logo" />
                        <div class="model-rows">
                            <div class="model-chip">{"Digital Designs"}</div>
                            <div class="model-chip">{"Machine Code"}</div>
                        </div>
                        <div class="model-connector"><Icon name="arrow-right" class="connector-icon red" /></div>
                    </div>
                    <div class="model-card brand-card">
                        <h3>{"Brand"}</h3>
                        <div class="brand-rule"></div>
                        <div class="brand-figures">
                            <div>
                                <span class="figure">{"+20%"}</span>
                                <span class="figure-label">{"EBIT Boost"}</span>
                            </div>
                            <div class="brand-divider"></div>
                            <div>
                                <span class="figure small">{"Pay 10%"}</span>
                                <span class="figure-label">{"Revenue Share"}</span>
                            </div>
                        </div>
                        <div class="model-connector"><Icon name="arrow-right" class="connector-icon dark" /></div>
                    </div>
                    <div class="model-card customer-card">
                        <h3>{"Customer"}</h3>
                        <div class="model-rows">
                            <div class="customer-row">
                                <span class="row-label">{"Receives"}</span>
                                <span class="row-value">{"Test Offers"}</span>
                            </div>
                            <div class="customer-row pay">
                                <span class="row-label">{"Pays"}</span>
                                <span class="row-value">{"Buy €"}</span>
                            </div>
                            <div class="customer-row">
                                <span class="row-label">{"Receives"}</span>
                                <span class="row-value">{"Product"}</span>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </Slide>
    }
}

#[function_component(MarketSlide)]
fn market_slide() -> Html {
    let hovered = use_state(|| None::<usize>);

    let enter = |tier: usize| {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(Some(tier)))
    };
    let leave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(None))
    };

    let tiers: [(&str, &str, &str); 4] = [
        ("Initial Entry Market", "Orthotic & Lifestyle Insoles", "€6B"),
        ("Segment Expansion", "Athletic & Lifestyle Sneakers", "€90B"),
        ("Market Expansion", "Footwear General", "€430B"),
        ("Total Addressable Market", "Global Fashion Market", "€2T"),
    ];

    let tier_class = |tier: usize, base: &'static str| {
        classes!(
            base,
            (*hovered == Some(tier)).then(|| "hot"),
            (hovered.is_some() && *hovered != Some(tier)).then(|| "dim"),
        )
    };

    html! {
        <Slide id="market-size" class="market">
            <div class="market-inner">
                <div class="market-copy">
                    <h2 class="market-heading">{"MARKET"}<br/><span class="dark">{"OPPORTUNITY"}</span></h2>
                    <h3 class="market-sub">{"10% of TAM is attainable with ONE AI"}</h3>
                    <div class="market-cards">
                        { for tiers.iter().enumerate().map(|(tier, (tag, label, value))| html! {
                            <div
                                class={tier_class(tier, "market-card")}
                                onmouseenter={enter(tier)}
                                onmouseleave={leave.clone()}
                            >
                                <div>
                                    <div class="market-tag">{ *tag }</div>
                                    <div class="market-label">{ *label }</div>
                                </div>
                                <div class="market-value">{ *value }</div>
                            </div>
                        })}
                    </div>
                </div>
                <div class="market-rings">
                    <div
                        class={tier_class(3, "ring ring-global")}
                        onmouseenter={enter(3)}
                        onmouseleave={leave.clone()}
                    >
                        <span>{"Global Fashion"}</span>
                    </div>
                    <div
                        class={tier_class(2, "ring ring-footwear")}
                        onmouseenter={enter(2)}
                        onmouseleave={leave.clone()}
                    >
                        <span>{"Footwear"}</span>
                    </div>
                    <div
                        class={tier_class(1, "ring ring-sneakers")}
                        onmouseenter={enter(1)}
                        onmouseleave={leave.clone()}
                    >
                        <span>{"Athletic & Lifestyle Sneakers"}</span>
                    </div>
                    <div
                        class={tier_class(0, "ring ring-target")}
                        onmouseenter={enter(0)}
                        onmouseleave={leave}
                    >
                        <span class="ring-value">{"€6B"}</span>
                        <span class="ring-tag">{"Target"}</span>
                    </div>
                </div>
            </div>
        </Slide>
    }
}

#[function_component(FinancialsSlide)]
fn financials_slide() -> Html {
    html! {
        <Slide id="financials" class="financials">
            <div class="financials-inner">
                <div class="financials-header">
                    <h2>{"Financial Growth"}</h2>
                    <h3>{"Revenue Projection (Millions €)"}</h3>
                </div>
                <RevenueChart />
                <div class="series-legend">
                    { for REVENUE_SERIES.iter().map(|series| {
                        let (r, g, b) = series.color;
                        let tint = format!(
                            "background-color: rgba({}, {}, {}, 0.12); color: rgb({}, {}, {});",
                            r, g, b, r, g, b
                        );
                        html! {
                            <div class="series-card">
                                <div class="series-icon" style={tint}>
                                    <Icon name={series.icon} />
                                </div>
                                <div class="series-meta">
                                    <span class="series-label">{ series.label }</span>
                                    <span class="series-terms">{ series.terms }</span>
                                </div>
                            </div>
                        }
                    })}
                </div>
            </div>
        </Slide>
    }
}

#[function_component(TeamSlide)]
fn team_slide() -> Html {
    html! {
        <Slide id="team" class="team">
            <div class="team-inner">
                <h2 class="team-heading">{"The Team"}</h2>
                <div class="team-grid">
                    { for TEAM_MEMBERS.iter().map(|member| html! {
                        <a
                            href={member.linkedin}
                            target="_blank"
                            rel="noopener noreferrer"
                            class="team-card"
                        >
                            <div class="team-photo">
                                <img src={member.img} alt={member.name} loading="lazy" />
                            </div>
                            <h3>{ member.name }</h3>
                            <p>{ member.role }</p>
                        </a>
                    })}
                </div>
            </div>
        </Slide>
    }
}

#[function_component(ContactSlide)]
fn contact_slide() -> Html {
    html! {
        <Slide id="contact" class="contact">
            <div class="contact-inner">
                <OneLogo class="contact-logo" />
                <div class="contact-rule"></div>
                <h2>{"Join the revolution."}</h2>
                <div class="contact-actions">
                    <a href="mailto:max@one-ai.fashion" class="contact-btn mail">
                        <Icon name="mail" />
                        {"Get in Touch"}
                    </a>
                    <a
                        href="https://www.linkedin.com/company/one-ai-fashion/"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="contact-btn linkedin"
                    >
                        <Icon name="linkedin" class="filled" />
                        {"LinkedIn"}
                    </a>
                </div>
            </div>
            <div class="copyright">{"© 2026 ONE AI"}</div>
        </Slide>
    }
}

#[function_component(Deck)]
pub fn deck() -> Html {
    html! {
        <div class="deck">
            <FloatingContactBtn />
            <SideNav />
            <HeroSlide />
            <PurposeSlide />
            <ProblemSlide />
            <PlatformSlide />
            <SolutionSlide />
            <BenefitsSlide />
            <WhyNowSlide />
            <PatentSlide />
            <BusinessModelSlide />
            <MarketSlide />
            <FinancialsSlide />
            <TeamSlide />
            <ContactSlide />
            <style>
                {r#"
                    .deck {
                        --brand-red: #E30613;
                        --brand-dark: #1A1A1A;
                        color: var(--brand-dark);
                    }

                    .deck ::selection {
                        background: var(--brand-red);
                        color: #fff;
                    }

                    /* Slides */

                    .slide {
                        min-height: 100vh;
                        width: 100%;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        position: relative;
                        padding: 4rem 1.5rem;
                        box-sizing: border-box;
                        overflow: hidden;
                    }

                    .slide-body {
                        width: 100%;
                        flex-grow: 1;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        opacity: 0;
                        transform: translateY(2.5rem);
                        transition: opacity 1s ease-out, transform 1s ease-out;
                    }

                    .slide-body.revealed {
                        opacity: 1;
                        transform: none;
                    }

                    /* Side navigation */

                    .side-nav {
                        position: fixed;
                        right: 1.5rem;
                        top: 50%;
                        transform: translateY(-50%);
                        z-index: 50;
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }

                    .nav-item {
                        position: relative;
                        display: flex;
                        align-items: center;
                        justify-content: flex-end;
                        text-decoration: none;
                    }

                    .nav-tooltip {
                        position: absolute;
                        right: 1.5rem;
                        padding: 0.25rem 0.5rem;
                        background: #000;
                        color: #fff;
                        font-size: 0.75rem;
                        border-radius: 0.25rem;
                        white-space: nowrap;
                        opacity: 0;
                        pointer-events: none;
                        transition: opacity 0.3s;
                    }

                    .nav-item:hover .nav-tooltip {
                        opacity: 1;
                    }

                    .nav-dot {
                        width: 0.75rem;
                        height: 0.75rem;
                        border-radius: 50%;
                        border: 1px solid var(--brand-dark);
                        background: transparent;
                        transition: all 0.3s;
                    }

                    .nav-item:hover .nav-dot {
                        background: #d1d5db;
                    }

                    .nav-dot.active {
                        background: var(--brand-red);
                        border-color: var(--brand-red);
                        transform: scale(1.25);
                    }

                    /* Floating contact */

                    .floating-contact {
                        position: fixed;
                        top: 1.5rem;
                        right: 1.5rem;
                        z-index: 50;
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        background: #000;
                        color: #fff;
                        padding: 0.75rem 1.25rem;
                        border-radius: 9999px;
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.2);
                        font-weight: 700;
                        font-size: 0.85rem;
                        letter-spacing: 0.03em;
                        text-decoration: none;
                        transition: all 0.3s;
                    }

                    .floating-contact:hover {
                        background: var(--brand-red);
                        transform: scale(1.05);
                    }

                    .icon {
                        width: 1.5rem;
                        height: 1.5rem;
                    }

                    .icon.filled {
                        fill: currentColor;
                        stroke: none;
                    }

                    .contact-icon {
                        width: 1.1rem;
                        height: 1.1rem;
                    }

                    /* Hero */

                    .hero {
                        background: radial-gradient(circle at center, #fff 0%, #fff 60%, #f9fafb 100%);
                    }

                    .hero-inner {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        max-width: 64rem;
                        width: 100%;
                    }

                    .hero-logo {
                        width: min(100%, 40rem);
                        height: auto;
                        color: var(--brand-red);
                        margin-bottom: 3rem;
                        animation: float 6s ease-in-out infinite;
                        filter: drop-shadow(0 1px 2px rgba(0, 0, 0, 0.1));
                    }

                    .hero-title {
                        font-size: clamp(1.9rem, 5vw, 3.75rem);
                        font-weight: 400;
                        letter-spacing: 0.025em;
                        text-align: center;
                        margin: 1rem 0 0;
                    }

                    .hero-strong {
                        font-weight: 700;
                    }

                    .scroll-cue {
                        margin-top: 3rem;
                        animation: bounce 1.5s infinite;
                    }

                    .scroll-cue-icon {
                        width: 2rem;
                        height: 2rem;
                        color: #9ca3af;
                    }

                    /* Purpose */

                    .purpose-inner {
                        max-width: 56rem;
                        width: 100%;
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }

                    .quote-mark {
                        width: 3.5rem;
                        height: 3.5rem;
                        fill: var(--brand-dark);
                        stroke: none;
                        opacity: 0.2;
                    }

                    .quote-open {
                        transform: rotate(180deg);
                    }

                    .quote-close {
                        align-self: flex-end;
                    }

                    .purpose-text {
                        font-size: clamp(1.5rem, 4vw, 3rem);
                        line-height: 1.25;
                        font-weight: 400;
                        margin: 0;
                    }

                    .accent {
                        font-style: italic;
                        font-family: Georgia, 'Times New Roman', serif;
                        color: var(--brand-red);
                    }

                    /* Problem */

                    .problem {
                        background: var(--brand-red);
                        color: #fff;
                    }

                    .problem-inner {
                        max-width: 72rem;
                        text-align: center;
                        display: flex;
                        flex-direction: column;
                        gap: 3rem;
                    }

                    .problem-lede {
                        font-size: clamp(1.25rem, 3vw, 2.25rem);
                        font-weight: 300;
                        opacity: 0.9;
                        margin: 0;
                    }

                    .problem-headline {
                        font-size: clamp(2.25rem, 8vw, 6rem);
                        font-weight: 900;
                        letter-spacing: -0.02em;
                        line-height: 1;
                        margin: 0;
                        text-shadow: 0 4px 6px rgba(0, 0, 0, 0.2);
                    }

                    .stat-card {
                        background: rgba(255, 255, 255, 0.1);
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        border-radius: 1.5rem;
                        padding: clamp(1.5rem, 4vw, 3rem);
                        backdrop-filter: blur(12px);
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    }

                    .stat-card p {
                        font-size: clamp(1.25rem, 4.5vw, 3.5rem);
                        line-height: 1.25;
                        font-weight: 500;
                        margin: 0;
                    }

                    .stat-soft {
                        opacity: 0.8;
                    }

                    .stat-strong {
                        color: #000;
                        font-weight: 900;
                    }

                    .stat-underline {
                        text-decoration: underline;
                        text-decoration-color: #fff;
                        text-underline-offset: 8px;
                    }

                    /* Platform */

                    .platform {
                        background: #111111;
                        color: #fff;
                    }

                    .platform-inner {
                        max-width: 80rem;
                        width: 100%;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                    }

                    .platform-heading {
                        font-size: clamp(1.5rem, 3vw, 2.25rem);
                        font-weight: 700;
                        text-align: center;
                        color: rgba(255, 255, 255, 0.9);
                        margin: 0 0 4rem;
                        line-height: 1.3;
                    }

                    .platform-layout {
                        display: flex;
                        width: 100%;
                        align-items: center;
                        justify-content: center;
                        gap: 4rem;
                    }

                    .diagram {
                        position: relative;
                        width: 100%;
                        max-width: 56rem;
                        aspect-ratio: 1.6 / 1;
                    }

                    .diagram-node {
                        position: absolute;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        text-align: center;
                        z-index: 20;
                    }

                    .node-west { left: 5%; top: 50%; transform: translateY(-50%); }
                    .node-north { top: 0; left: 50%; transform: translateX(-50%); }
                    .node-east { right: 5%; top: 50%; transform: translateY(-50%); }
                    .node-south { bottom: 0; left: 50%; transform: translateX(-50%); width: 16rem; }

                    .node-badge {
                        background: rgba(255, 255, 255, 0.1);
                        padding: 0.75rem;
                        border-radius: 50%;
                        backdrop-filter: blur(4px);
                    }

                    .node-icon {
                        width: 2.5rem;
                        height: 2.5rem;
                        color: var(--brand-red);
                    }

                    .node-logo {
                        background: rgba(0, 0, 0, 0.5);
                        padding: 0.5rem;
                        border-radius: 0.75rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        margin-bottom: 0.5rem;
                    }

                    .diagram-logo {
                        width: 8rem;
                        height: auto;
                        color: #fff;
                        display: block;
                    }

                    .node-caption {
                        font-size: 0.85rem;
                        line-height: 1.4;
                        color: #9ca3af;
                        margin: 0;
                    }

                    .diagram-lines {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        pointer-events: none;
                        z-index: 10;
                    }

                    .diagram-lines .flow {
                        animation: pulse 2s ease-in-out infinite;
                    }

                    .diagram-label {
                        position: absolute;
                        font-size: 0.85rem;
                        font-weight: 500;
                        color: #d1d5db;
                        line-height: 1.35;
                    }

                    .label-nw { top: 25%; left: 14%; text-align: center; }
                    .label-ne { top: 25%; right: 15%; text-align: right; }
                    .label-sw { bottom: 25%; left: 15%; text-align: left; }
                    .label-se { bottom: 40%; right: 22%; }

                    .world-legend {
                        display: flex;
                        flex-direction: column;
                        gap: 3rem;
                        max-width: 20rem;
                        padding: 1.5rem;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 1rem;
                        backdrop-filter: blur(4px);
                    }

                    .legend-title {
                        font-weight: 700;
                        font-size: 1.125rem;
                        margin: 0 0 0.5rem;
                    }

                    .legend-title.red {
                        color: var(--brand-red);
                    }

                    .legend-text {
                        font-size: 0.875rem;
                        line-height: 1.6;
                        font-weight: 500;
                        color: #e5e7eb;
                        margin: 0;
                    }

                    .legend-text.muted {
                        color: #9ca3af;
                    }

                    .legend-divider {
                        height: 1px;
                        width: 100%;
                        background: rgba(255, 255, 255, 0.1);
                    }

                    .platform-footnote {
                        position: absolute;
                        bottom: 1rem;
                        right: 2rem;
                        font-size: 0.7rem;
                        opacity: 0.5;
                        text-align: right;
                    }

                    /* Solution */

                    .solution-inner {
                        width: 100%;
                        max-width: 80rem;
                        display: flex;
                        flex-direction: column;
                    }

                    .solution-heading {
                        font-size: clamp(1.5rem, 3vw, 2.25rem);
                        color: var(--brand-red);
                        font-weight: 700;
                        text-align: center;
                        margin: 0 0 3rem;
                    }

                    .solution-subheading {
                        font-weight: 400;
                        color: #000;
                    }

                    .pillars {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        min-height: 30rem;
                        border-radius: 1rem;
                        overflow: hidden;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    }

                    .pillar {
                        position: relative;
                        padding: 2rem;
                        overflow: hidden;
                        transition: background 0.5s;
                    }

                    .pillar-discover { border-right: 1px solid #e5e7eb; background: #fff; }
                    .pillar-design { background: #f9fafb; }
                    .pillar-instruct { background: var(--brand-dark); color: #fff; }

                    .pillar-discover:hover { background: #f9fafb; }
                    .pillar-design:hover { background: #f3f4f6; }
                    .pillar-instruct:hover { background: #000; }

                    .pillar-copy {
                        position: relative;
                        z-index: 10;
                    }

                    .pillar-copy.centered { text-align: center; }
                    .pillar-copy.right { text-align: right; }

                    .pillar h3 {
                        font-size: clamp(1.5rem, 3vw, 2.25rem);
                        font-weight: 700;
                        margin: 0 0 0.5rem;
                    }

                    .pillar p {
                        font-size: 1.05rem;
                        color: #4b5563;
                        margin: 0;
                    }

                    .pillar-instruct p {
                        color: #9ca3af;
                    }

                    .pillar img {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        filter: grayscale(1);
                        opacity: 0.2;
                        transition: opacity 0.7s;
                    }

                    .pillar:hover img {
                        opacity: 0.4;
                    }

                    .selfwear-tagline {
                        margin-top: 2rem;
                        text-align: center;
                    }

                    .selfwear-tagline h3 {
                        font-size: clamp(2.25rem, 5vw, 3.75rem);
                        font-weight: 700;
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                        margin: 0;
                    }

                    .selfwear-tagline p {
                        font-size: clamp(1.5rem, 3vw, 1.875rem);
                        color: #6b7280;
                        margin: 0.5rem 0 0;
                    }

                    /* Benefits */

                    .benefits-inner {
                        width: 100%;
                        max-width: 72rem;
                    }

                    .benefits-heading {
                        font-size: clamp(1.875rem, 4vw, 3rem);
                        font-weight: 700;
                        text-align: center;
                        margin: 0 0 4rem;
                    }

                    .benefits-heading .push {
                        color: #d1d5db;
                        text-decoration: line-through;
                        text-decoration-color: var(--brand-red);
                        text-decoration-thickness: 2px;
                    }

                    .benefits-heading .pull {
                        color: var(--brand-red);
                    }

                    .transform-rows {
                        display: grid;
                        gap: 1rem;
                    }

                    .transform-row {
                        display: grid;
                        grid-template-columns: 3fr 1fr 8fr;
                        align-items: center;
                        gap: 1rem;
                        padding: 1.5rem;
                        border-bottom: 1px solid #f3f4f6;
                        border-radius: 1rem;
                        transition: all 0.3s;
                    }

                    .transform-row:hover {
                        background: #f9fafb;
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                    }

                    .row-title {
                        font-size: 1.4rem;
                        font-weight: 700;
                        text-align: right;
                        transition: color 0.3s;
                    }

                    .transform-row:hover .row-title {
                        color: var(--brand-red);
                    }

                    .row-arrow {
                        display: flex;
                        justify-content: center;
                    }

                    .arrow-icon {
                        width: 2rem;
                        height: 2rem;
                        color: #10b981;
                        stroke-width: 3;
                        transition: transform 0.3s;
                    }

                    .transform-row:hover .arrow-icon {
                        transform: scale(1.25);
                    }

                    .row-desc {
                        font-size: 1.2rem;
                        font-weight: 300;
                        color: #4b5563;
                    }

                    /* Why now */

                    .whynow {
                        background: var(--brand-dark);
                        color: #fff;
                    }

                    .whynow-inner {
                        width: 100%;
                        max-width: 80rem;
                        display: flex;
                        gap: 4rem;
                    }

                    .whynow-header {
                        flex: 1;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        border-right: 1px solid #1f2937;
                        padding-right: 3rem;
                    }

                    .whynow-header h2 {
                        font-size: clamp(3rem, 7vw, 6rem);
                        font-weight: 900;
                        letter-spacing: -0.04em;
                        line-height: 1;
                        margin: 0 0 1rem;
                    }

                    .whynow-header .red {
                        color: var(--brand-red);
                    }

                    .whynow-header p {
                        font-size: clamp(1.125rem, 2vw, 1.5rem);
                        color: #9ca3af;
                        font-weight: 300;
                        line-height: 1.6;
                        margin: 0;
                    }

                    .why-cards {
                        flex: 2;
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 1.5rem;
                        align-content: center;
                    }

                    .why-card {
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        padding: 2rem;
                        border-radius: 1rem;
                        transition: all 0.3s;
                        cursor: default;
                    }

                    .why-card:hover {
                        background: var(--brand-red);
                        border-color: var(--brand-red);
                        box-shadow: 0 0 30px rgba(227, 6, 19, 0.3);
                    }

                    .why-icon {
                        width: 2.5rem;
                        height: 2.5rem;
                        color: var(--brand-red);
                        margin-bottom: 1rem;
                        transition: color 0.3s;
                    }

                    .why-card:hover .why-icon {
                        color: #fff;
                    }

                    .why-card h3 {
                        font-size: 1.4rem;
                        font-weight: 700;
                        margin: 0 0 0.5rem;
                    }

                    .why-card p {
                        font-size: 0.9rem;
                        line-height: 1.6;
                        color: #9ca3af;
                        margin: 0;
                        transition: color 0.3s;
                    }

                    .why-card:hover p {
                        color: rgba(255, 255, 255, 0.9);
                    }

                    /* Patent */

                    .patent-inner {
                        width: 100%;
                        max-width: 72rem;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                    }

                    .patent-header {
                        text-align: center;
                        max-width: 56rem;
                        margin-bottom: 3rem;
                    }

                    .patent-header h2 {
                        font-size: clamp(1.875rem, 4vw, 3rem);
                        font-weight: 700;
                        color: var(--brand-red);
                        line-height: 1.2;
                        margin: 0 0 1rem;
                    }

                    .patent-header h3 {
                        font-size: clamp(1.25rem, 3vw, 2.25rem);
                        font-weight: 300;
                        color: #000;
                        margin: 0;
                    }

                    .patent-layout {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                        width: 100%;
                    }

                    .cycle-col {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                    }

                    .cycle-col h4 {
                        font-size: 1.4rem;
                        font-weight: 500;
                        margin: 0 0 1rem;
                        color: #1f2937;
                    }

                    .cycle-box {
                        width: 22rem;
                        height: 22rem;
                        border-radius: 1.5rem;
                        position: relative;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: space-between;
                        padding: 1.5rem;
                        box-sizing: border-box;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                        overflow: hidden;
                    }

                    .sell-box {
                        background: #fef2f2;
                        border: 1px solid #f3f4f6;
                        color: #000;
                    }

                    .make-box {
                        background: var(--brand-red);
                        color: #fff;
                    }

                    .cycle-top, .cycle-bottom div {
                        font-size: 1.05rem;
                        font-weight: 700;
                        text-align: center;
                        line-height: 1.25;
                        z-index: 10;
                    }

                    .cycle-center {
                        position: relative;
                        flex-grow: 1;
                        width: 100%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }

                    .cycle-arrows {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        transform: scale(0.95);
                        animation: spin-slow 14s linear infinite;
                    }

                    .cycle-word {
                        font-size: clamp(1.875rem, 4vw, 3rem);
                        font-weight: 700;
                        letter-spacing: 0.2em;
                        z-index: 10;
                    }

                    .cycle-word.red {
                        color: var(--brand-red);
                    }

                    .cycle-bottom {
                        display: flex;
                        justify-content: space-between;
                        width: 100%;
                    }

                    .buy-connector {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        margin: 0 1rem;
                        z-index: 20;
                    }

                    .buy-arrow {
                        width: 4rem;
                        height: 4rem;
                        stroke-width: 1;
                        color: #000;
                    }

                    .buy-connector span {
                        font-weight: 700;
                        font-size: 1.25rem;
                        text-transform: uppercase;
                        margin-top: 0.5rem;
                    }

                    /* Business model */

                    .business-model {
                        background: #f9fafb;
                    }

                    .model-inner {
                        width: 100%;
                        max-width: 80rem;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                    }

                    .model-header {
                        text-align: center;
                        margin-bottom: 4rem;
                    }

                    .model-header h2 {
                        font-size: clamp(1.875rem, 5vw, 3.75rem);
                        font-weight: 700;
                        color: var(--brand-red);
                        margin: 0 0 1.5rem;
                    }

                    .model-header h3 {
                        font-size: clamp(1.125rem, 2.5vw, 1.875rem);
                        font-weight: 300;
                        color: #000;
                        line-height: 1.6;
                        margin: 0;
                    }

                    .model-sub {
                        color: #6b7280;
                        font-size: 0.85em;
                    }

                    .model-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                        width: 100%;
                        align-items: stretch;
                    }

                    .model-card {
                        position: relative;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        text-align: center;
                        padding: 3rem 2rem;
                        border-radius: 1.5rem;
                        transition: transform 0.3s;
                    }

                    .one-card {
                        background: #fff;
                        border-top: 4px solid var(--brand-red);
                        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                    }

                    .one-card:hover, .customer-card:hover {
                        transform: translateY(-0.5rem);
                    }

                    .model-logo {
                        height: 4rem;
                        width: auto;
                        color: var(--brand-red);
                        margin-bottom: 2rem;
                    }

                    .model-rows {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        width: 100%;
                        flex-grow: 1;
                        justify-content: center;
                    }

                    .model-chip {
                        background: #f9fafb;
                        border: 1px solid #f3f4f6;
                        padding: 1rem;
                        border-radius: 0.75rem;
                        font-weight: 700;
                        font-size: 1.05rem;
                        color: #1f2937;
                    }

                    .brand-card {
                        background: var(--brand-red);
                        color: #fff;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                        transform: translateY(-1rem);
                        z-index: 10;
                    }

                    .brand-card:hover {
                        transform: translateY(-1rem) scale(1.05);
                    }

                    .brand-card h3, .customer-card h3 {
                        font-size: 3rem;
                        font-weight: 100;
                        letter-spacing: 0.025em;
                        margin: 0 0 0.5rem;
                    }

                    .brand-rule {
                        width: 3rem;
                        height: 4px;
                        background: rgba(255, 255, 255, 0.5);
                        margin-bottom: 2rem;
                    }

                    .brand-figures {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                        justify-content: center;
                        flex-grow: 1;
                        width: 100%;
                    }

                    .figure {
                        display: block;
                        font-size: 2.25rem;
                        font-weight: 700;
                    }

                    .figure.small {
                        font-size: 1.25rem;
                    }

                    .figure-label {
                        font-size: 0.8rem;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        color: rgba(255, 255, 255, 0.8);
                    }

                    .brand-divider {
                        height: 1px;
                        background: rgba(255, 255, 255, 0.2);
                        width: 100%;
                    }

                    .customer-card {
                        background: #000;
                        color: #fff;
                        border-top: 4px solid #4b5563;
                        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                    }

                    .customer-card h3 {
                        margin-bottom: 2rem;
                    }

                    .customer-row {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        background: #111827;
                        border: 1px solid #1f2937;
                        padding: 1rem;
                        border-radius: 0.75rem;
                    }

                    .customer-row .row-label {
                        color: #9ca3af;
                        font-size: 0.85rem;
                    }

                    .customer-row .row-value {
                        font-weight: 700;
                    }

                    .customer-row.pay {
                        background: #fff;
                        color: #000;
                        border: 2px solid transparent;
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.3);
                        transition: border-color 0.3s;
                    }

                    .customer-row.pay:hover {
                        border-color: var(--brand-red);
                    }

                    .customer-row.pay .row-label {
                        color: #000;
                        font-weight: 500;
                    }

                    .customer-row.pay .row-value {
                        font-size: 1.25rem;
                    }

                    .model-connector {
                        display: none;
                    }

                    @media (min-width: 768px) {
                        .model-connector {
                            display: flex;
                            position: absolute;
                            right: -1.5rem;
                            top: 50%;
                            transform: translateY(-50%);
                            width: 3rem;
                            height: 3rem;
                            background: #fff;
                            border: 1px solid #f3f4f6;
                            border-radius: 50%;
                            align-items: center;
                            justify-content: center;
                            box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                            z-index: 10;
                        }
                    }

                    .connector-icon {
                        width: 1.5rem;
                        height: 1.5rem;
                    }

                    .connector-icon.red { color: var(--brand-red); }
                    .connector-icon.dark { color: #000; }

                    /* Market */

                    .market-inner {
                        width: 100%;
                        max-width: 80rem;
                        display: flex;
                        align-items: center;
                        gap: 6rem;
                    }

                    .market-copy {
                        flex: 1;
                        z-index: 20;
                    }

                    .market-heading {
                        font-size: clamp(2.25rem, 6vw, 4.5rem);
                        font-weight: 900;
                        color: var(--brand-red);
                        letter-spacing: -0.04em;
                        line-height: 1;
                        margin: 0 0 1rem;
                    }

                    .market-heading .dark {
                        color: #000;
                    }

                    .market-sub {
                        font-size: clamp(1.125rem, 2vw, 1.5rem);
                        font-weight: 300;
                        color: #4b5563;
                        margin: 0 0 2rem;
                    }

                    .market-cards {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }

                    .market-card {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 1.5rem;
                        border-radius: 1.5rem;
                        background: #f9fafb;
                        border: 1px solid #f3f4f6;
                        color: #1f2937;
                        cursor: pointer;
                        transition: all 0.3s;
                    }

                    .market-card.hot {
                        background: var(--brand-red);
                        color: #fff;
                        transform: scale(1.05);
                        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.2);
                    }

                    .market-tag {
                        font-size: 0.7rem;
                        font-weight: 700;
                        text-transform: uppercase;
                        letter-spacing: 0.05em;
                        color: var(--brand-red);
                        margin-bottom: 0.25rem;
                    }

                    .market-card.hot .market-tag {
                        color: rgba(255, 255, 255, 0.8);
                    }

                    .market-label {
                        font-size: 1.25rem;
                        font-weight: 700;
                    }

                    .market-value {
                        font-size: clamp(1.5rem, 3vw, 2.25rem);
                        font-weight: 900;
                    }

                    .market-rings {
                        flex: 1;
                        position: relative;
                        width: 100%;
                        max-width: 37.5rem;
                        aspect-ratio: 1 / 1;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }

                    .ring {
                        position: absolute;
                        border-radius: 50%;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: flex-start;
                        cursor: pointer;
                        transition: all 0.5s ease-in-out;
                    }

                    .ring span {
                        font-size: 0.7rem;
                        font-weight: 700;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        margin-top: 0.75rem;
                    }

                    .ring.hot {
                        transform: scale(1.1);
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                        z-index: 50;
                    }

                    .ring.dim {
                        opacity: 0.4;
                        transform: scale(0.95);
                        filter: blur(1px);
                    }

                    .ring-global {
                        width: 100%;
                        height: 100%;
                        border: 2px dashed #e5e7eb;
                        background: rgba(249, 250, 251, 0.3);
                        padding-top: 1.5rem;
                    }

                    .ring-global span { color: #d1d5db; }
                    .ring-global.hot { border-style: solid; border-color: var(--brand-red); background: #fef2f2; }
                    .ring-global.hot span { color: var(--brand-red); }

                    .ring-footwear {
                        width: 75%;
                        height: 75%;
                        border: 1px solid #d1d5db;
                        background: #fff;
                        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                        padding-top: 1.25rem;
                        z-index: 10;
                    }

                    .ring-footwear span { color: #9ca3af; }
                    .ring-footwear.hot { border-color: var(--brand-red); }
                    .ring-footwear.hot span { color: var(--brand-red); }

                    .ring-sneakers {
                        width: 50%;
                        height: 50%;
                        background: #fef2f2;
                        border: 1px solid #fecaca;
                        box-shadow: inset 0 2px 4px rgba(0, 0, 0, 0.05);
                        padding-top: 0.75rem;
                        z-index: 20;
                    }

                    .ring-sneakers span { color: #fca5a5; }
                    .ring-sneakers.hot { background: #fee2e2; border-color: var(--brand-red); }
                    .ring-sneakers.hot span { color: var(--brand-red); }

                    .ring-target {
                        width: 25%;
                        height: 25%;
                        background: var(--brand-red);
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                        justify-content: center;
                        z-index: 30;
                    }

                    .ring-target.hot {
                        transform: scale(1.25);
                    }

                    .ring-value {
                        font-size: clamp(1.125rem, 3vw, 2.25rem);
                        font-weight: 900;
                        color: #fff;
                        line-height: 1;
                        margin: 0;
                    }

                    .ring-tag {
                        font-size: 0.6rem;
                        color: #fff;
                        margin-top: 0.25rem;
                    }

                    /* Financials */

                    .financials-inner {
                        width: 100%;
                        max-width: 72rem;
                        display: flex;
                        flex-direction: column;
                    }

                    .financials-header {
                        text-align: center;
                        margin-bottom: 2rem;
                    }

                    .financials-header h2 {
                        font-size: clamp(1.875rem, 4vw, 3rem);
                        font-weight: 700;
                        margin: 0 0 0.5rem;
                    }

                    .financials-header h3 {
                        font-size: clamp(1.125rem, 2vw, 1.5rem);
                        font-weight: 300;
                        color: #6b7280;
                        margin: 0;
                    }

                    .revenue-chart {
                        background: #fff;
                        border: 1px solid #f3f4f6;
                        border-radius: 1.5rem;
                        padding: 1.5rem;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.15);
                        display: flex;
                        justify-content: center;
                    }

                    .series-legend {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 1rem;
                        margin-top: 2rem;
                    }

                    .series-card {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        background: #fff;
                        border: 1px solid #f3f4f6;
                        border-radius: 1rem;
                        padding: 1rem;
                        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                        transition: all 0.3s;
                        cursor: pointer;
                    }

                    .series-card:hover {
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                        transform: translateY(-0.25rem);
                    }

                    .series-icon {
                        padding: 0.75rem;
                        border-radius: 0.75rem;
                        box-shadow: inset 0 2px 4px rgba(0, 0, 0, 0.05);
                        display: flex;
                        transition: transform 0.3s;
                    }

                    .series-card:hover .series-icon {
                        transform: scale(1.1);
                    }

                    .series-meta {
                        display: flex;
                        flex-direction: column;
                    }

                    .series-label {
                        font-weight: 700;
                        color: #1f2937;
                        line-height: 1.3;
                    }

                    .series-terms {
                        font-size: 0.85rem;
                        color: #6b7280;
                        font-weight: 500;
                    }

                    /* Team */

                    .team-inner {
                        width: 100%;
                        max-width: 72rem;
                    }

                    .team-heading {
                        font-size: clamp(1.875rem, 4vw, 3rem);
                        font-weight: 700;
                        text-align: center;
                        margin: 0 0 4rem;
                    }

                    .team-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 3rem;
                    }

                    .team-card {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        text-align: center;
                        text-decoration: none;
                        color: inherit;
                    }

                    .team-photo {
                        width: 11rem;
                        height: 11rem;
                        border-radius: 50%;
                        overflow: hidden;
                        margin-bottom: 1.5rem;
                        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.15);
                        transition: all 0.5s;
                    }

                    .team-photo img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        filter: grayscale(1);
                        transition: filter 0.5s;
                    }

                    .team-card:hover .team-photo {
                        transform: scale(1.05);
                        box-shadow: 0 0 0 4px rgba(227, 6, 19, 0.2), 0 20px 25px -5px rgba(0, 0, 0, 0.15);
                    }

                    .team-card:hover .team-photo img {
                        filter: none;
                    }

                    .team-card h3 {
                        font-size: 1.25rem;
                        font-weight: 700;
                        margin: 0;
                        transition: color 0.3s;
                    }

                    .team-card:hover h3 {
                        color: var(--brand-red);
                    }

                    .team-card p {
                        font-size: 1rem;
                        color: #6b7280;
                        font-weight: 500;
                        margin: 0.25rem 0 0;
                        transition: color 0.3s;
                    }

                    .team-card:hover p {
                        color: var(--brand-red);
                    }

                    /* Contact */

                    .contact {
                        background: #000;
                        color: #fff;
                    }

                    .contact::before {
                        content: '';
                        position: absolute;
                        top: 50%;
                        left: 50%;
                        transform: translate(-50%, -50%);
                        width: 31rem;
                        height: 31rem;
                        background: rgba(227, 6, 19, 0.2);
                        filter: blur(120px);
                        border-radius: 50%;
                        pointer-events: none;
                    }

                    .contact-inner {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 2rem;
                        position: relative;
                        z-index: 10;
                    }

                    .contact-logo {
                        width: 16rem;
                        height: auto;
                        color: var(--brand-red);
                        animation: float 6s ease-in-out infinite;
                    }

                    .contact-rule {
                        height: 1px;
                        width: 6rem;
                        background: var(--brand-red);
                    }

                    .contact-inner h2 {
                        font-size: clamp(1.5rem, 3vw, 1.875rem);
                        font-weight: 300;
                        letter-spacing: 0.025em;
                        margin: 0;
                    }

                    .contact-actions {
                        display: flex;
                        gap: 1.5rem;
                        margin-top: 1rem;
                    }

                    .contact-btn {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.75rem;
                        padding: 1rem 2rem;
                        border-radius: 9999px;
                        font-weight: 700;
                        font-size: 1.125rem;
                        text-decoration: none;
                        transition: all 0.3s;
                    }

                    .contact-btn.mail {
                        background: transparent;
                        border: 2px solid #fff;
                        color: #fff;
                    }

                    .contact-btn.mail:hover {
                        background: #fff;
                        color: #000;
                        box-shadow: 0 0 20px rgba(255, 255, 255, 0.4);
                    }

                    .contact-btn.linkedin {
                        background: #0077b5;
                        border: 2px solid #0077b5;
                        color: #fff;
                    }

                    .contact-btn.linkedin:hover {
                        background: #006097;
                        border-color: #006097;
                        box-shadow: 0 0 20px rgba(0, 119, 181, 0.4);
                    }

                    .copyright {
                        position: absolute;
                        bottom: 2rem;
                        right: 2rem;
                        opacity: 0.5;
                        font-size: 0.85rem;
                    }

                    /* Animations */

                    @keyframes float {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(-0.75rem); }
                    }

                    @keyframes bounce {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(0.5rem); }
                    }

                    @keyframes spin-slow {
                        from { transform: scale(0.95) rotate(0deg); }
                        to { transform: scale(0.95) rotate(360deg); }
                    }

                    @keyframes pulse {
                        0%, 100% { opacity: 1; }
                        50% { opacity: 0.4; }
                    }

                    /* Mobile */

                    @media (max-width: 768px) {
                        .side-nav {
                            display: none;
                        }

                        .platform-layout,
                        .whynow-inner,
                        .market-inner {
                            flex-direction: column;
                            gap: 2rem;
                        }

                        .whynow-header {
                            border-right: none;
                            border-bottom: 1px solid #1f2937;
                            padding-right: 0;
                            padding-bottom: 2rem;
                        }

                        .why-cards,
                        .pillars,
                        .model-grid {
                            grid-template-columns: 1fr;
                        }

                        .pillar {
                            min-height: 16rem;
                        }

                        .pillar-discover {
                            border-right: none;
                            border-bottom: 1px solid #e5e7eb;
                        }

                        .patent-layout {
                            flex-direction: column;
                            gap: 2rem;
                        }

                        .buy-arrow {
                            transform: rotate(90deg);
                        }

                        .brand-card {
                            transform: none;
                        }

                        .brand-card:hover {
                            transform: scale(1.02);
                        }

                        .cycle-box {
                            width: 16rem;
                            height: 16rem;
                        }

                        .transform-row {
                            grid-template-columns: 1fr;
                            text-align: center;
                        }

                        .row-title {
                            text-align: center;
                        }

                        .series-legend {
                            grid-template-columns: repeat(2, 1fr);
                        }

                        .team-grid {
                            grid-template-columns: repeat(2, 1fr);
                            gap: 1.5rem;
                        }

                        .team-photo {
                            width: 8rem;
                            height: 8rem;
                        }

                        .market-rings {
                            order: -1;
                            max-width: 20rem;
                        }

                        .contact-actions {
                            flex-direction: column;
                            width: 100%;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
