use yew::prelude::*;

use crate::components::reveal::use_scroll_reveal;

struct Station {
    name: &'static str,
    address: &'static str,
    distance: &'static str,
    available: u8,
    total: u8,
    rating: &'static str,
    kind: &'static str,
}

const STATIONS: &[Station] = &[
    Station {
        name: "Downtown EV Hub",
        address: "123 Electric Ave, Downtown",
        distance: "1.2 km",
        available: 4,
        total: 6,
        rating: "4.8",
        kind: "Fast Charging",
    },
    Station {
        name: "Green Mall Station",
        address: "456 Green Street, Mall Area",
        distance: "2.5 km",
        available: 2,
        total: 4,
        rating: "4.5",
        kind: "Standard",
    },
    Station {
        name: "Tech Park Charger",
        address: "789 Innovation Blvd",
        distance: "3.8 km",
        available: 8,
        total: 10,
        rating: "4.9",
        kind: "Ultra-Fast",
    },
];

#[function_component(StationsSection)]
pub fn stations_section() -> Html {
    let section = use_node_ref();
    use_scroll_reveal(section.clone());

    html! {
        <section ref={section} id="stations" class="stations-section reveal">
            <style>
            {r#".stations-section {
                padding: 6rem 1.5rem;
                background: rgba(255, 255, 255, 0.02);
            }
            .stations-header {
                max-width: 48rem;
                margin: 0 auto 4rem;
                text-align: center;
            }
            .stations-header .section-pill {
                display: inline-block;
                padding: 0.5rem 1rem;
                border-radius: 999px;
                background: rgba(52, 211, 153, 0.1);
                color: #34D399;
                font-size: 0.85rem;
                font-weight: 500;
                margin-bottom: 1rem;
            }
            .stations-header h2 {
                font-size: clamp(1.8rem, 4vw, 2.8rem);
                color: #fff;
                margin-bottom: 1.2rem;
            }
            .stations-header h2 .text-gradient {
                background: linear-gradient(45deg, #34D399, #2DD4BF);
                -webkit-background-clip: text;
                -webkit-text-fill-color: transparent;
            }
            .stations-header p {
                font-size: 1.05rem;
                color: rgba(255, 255, 255, 0.7);
            }
            .stations-grid {
                max-width: 1200px;
                margin: 0 auto;
                display: grid;
                grid-template-columns: 1fr 1fr;
                gap: 2rem;
                align-items: start;
            }
            .map-panel {
                position: relative;
                aspect-ratio: 4 / 3;
                border-radius: 16px;
                overflow: hidden;
                border: 1px solid rgba(255, 255, 255, 0.08);
                background:
                    linear-gradient(to right, rgba(52, 211, 153, 0.08) 1px, transparent 1px),
                    linear-gradient(to bottom, rgba(52, 211, 153, 0.08) 1px, transparent 1px),
                    linear-gradient(135deg, #10281f, #0d2622);
                background-size: 40px 40px, 40px 40px, 100% 100%;
            }
            .map-pin {
                position: absolute;
                width: 40px;
                height: 40px;
                border-radius: 50%;
                background: #34D399;
                color: #053527;
                display: flex;
                align-items: center;
                justify-content: center;
                font-size: 1.1rem;
                box-shadow: 0 4px 16px rgba(0, 0, 0, 0.4);
                animation: pin-bounce 2s ease-in-out infinite;
            }
            @keyframes pin-bounce {
                0%, 100% { transform: translateY(0); }
                50% { transform: translateY(-8px); }
            }
            .map-pin.one { top: 22%; left: 30%; }
            .map-pin.two { top: 48%; right: 24%; animation-delay: 0.5s; }
            .map-pin.three { bottom: 30%; left: 48%; animation-delay: 1s; }
            .user-dot {
                position: absolute;
                top: 50%;
                left: 50%;
                transform: translate(-50%, -50%);
                width: 18px;
                height: 18px;
                border-radius: 50%;
                background: #3b82f6;
                border: 4px solid rgba(255, 255, 255, 0.9);
            }
            .user-dot::after {
                content: '';
                position: absolute;
                inset: -8px;
                border-radius: 50%;
                background: rgba(59, 130, 246, 0.4);
                animation: ping 1.5s ease-out infinite;
            }
            @keyframes ping {
                0% { transform: scale(0.6); opacity: 1; }
                100% { transform: scale(1.6); opacity: 0; }
            }
            .map-overlay {
                position: absolute;
                bottom: 0;
                left: 0;
                right: 0;
                padding: 1.5rem;
                background: linear-gradient(to top, rgba(13, 38, 34, 0.95), transparent);
            }
            .map-overlay a {
                display: block;
                text-align: center;
                padding: 0.9rem;
                border-radius: 10px;
                background: linear-gradient(135deg, #34D399, #2DD4BF);
                color: #053527;
                font-weight: 700;
                text-decoration: none;
            }
            .station-list h3 {
                color: #fff;
                font-size: 1.2rem;
                margin-bottom: 1.5rem;
            }
            .station-item {
                display: flex;
                gap: 1rem;
                padding: 1.1rem;
                border-radius: 14px;
                background: rgba(30, 30, 30, 0.5);
                border: 1px solid rgba(255, 255, 255, 0.08);
                margin-bottom: 1rem;
                transition: border-color 0.3s ease;
                cursor: pointer;
            }
            .station-item:hover {
                border-color: rgba(52, 211, 153, 0.3);
            }
            .station-item .station-icon {
                width: 46px;
                height: 46px;
                border-radius: 12px;
                background: rgba(52, 211, 153, 0.1);
                display: flex;
                align-items: center;
                justify-content: center;
                font-size: 1.2rem;
                flex-shrink: 0;
            }
            .station-item .station-top {
                display: flex;
                align-items: center;
                justify-content: space-between;
                gap: 0.5rem;
            }
            .station-item h4 {
                color: #fff;
                font-size: 1rem;
            }
            .station-item .station-distance {
                font-size: 0.82rem;
                color: rgba(255, 255, 255, 0.55);
                flex-shrink: 0;
            }
            .station-item .station-address {
                font-size: 0.85rem;
                color: rgba(255, 255, 255, 0.6);
                margin: 0.25rem 0 0.6rem;
            }
            .station-meta {
                display: flex;
                flex-wrap: wrap;
                align-items: center;
                gap: 0.8rem;
                font-size: 0.75rem;
            }
            .station-meta .station-kind {
                padding: 0.25rem 0.6rem;
                border-radius: 999px;
                background: rgba(52, 211, 153, 0.1);
                color: #34D399;
                font-weight: 600;
            }
            .station-meta .station-slots {
                color: rgba(255, 255, 255, 0.6);
            }
            .station-meta .station-rating {
                color: #f59e0b;
            }
            @media (max-width: 900px) {
                .stations-grid {
                    grid-template-columns: 1fr;
                }
            }"#}
            </style>
            <div class="stations-header">
                <span class="section-pill">{"Station Locator"}</span>
                <h2>
                    {"Find "}<span class="text-gradient">{"Charging Stations"}</span>{" Near You"}
                </h2>
                <p>
                    {"Locate the nearest charging stations with real-time availability. \
                      Filter by charging speed, amenities, and more."}
                </p>
            </div>
            <div class="stations-grid">
                <div class="map-panel reveal-item">
                    <div class="map-pin one">{"⚡"}</div>
                    <div class="map-pin two">{"⚡"}</div>
                    <div class="map-pin three">{"⚡"}</div>
                    <div class="user-dot"></div>
                    <div class="map-overlay">
                        <a href="/#stations">{"🧭 Find Stations Near Me →"}</a>
                    </div>
                </div>
                <div class="station-list">
                    <h3>{"Nearby Stations"}</h3>
                    { STATIONS.iter().enumerate().map(|(i, station)| {
                        html! {
                            <div class="station-item reveal-item" style={format!("transition-delay: {}ms", i * 100)}>
                                <div class="station-icon">{"📍"}</div>
                                <div style="flex: 1; min-width: 0;">
                                    <div class="station-top">
                                        <h4>{station.name}</h4>
                                        <span class="station-distance">{station.distance}</span>
                                    </div>
                                    <p class="station-address">{station.address}</p>
                                    <div class="station-meta">
                                        <span class="station-kind">{"⚡ "}{station.kind}</span>
                                        <span class="station-slots">
                                            {"🕒 "}{station.available}{"/"}{station.total}{" available"}
                                        </span>
                                        <span class="station-rating">{"★ "}{station.rating}</span>
                                    </div>
                                </div>
                            </div>
                        }
                    }).collect::<Html>() }
                </div>
            </div>
        </section>
    }
}
