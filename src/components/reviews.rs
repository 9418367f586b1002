use std::rc::Rc;

use yew::prelude::*;

use crate::config::{Review, SiteConfig};

#[derive(Properties, PartialEq)]
pub struct ReviewsProps {
    pub config: Rc<SiteConfig>,
}

fn stars(count: u8) -> Html {
    (0..count)
        .map(|_| html! { <i class="fas fa-star"></i> })
        .collect()
}

fn review_card(review: &Review) -> Html {
    html! {
        <div class="card review-card">
            <div class="review-rating">
                <div class="stars">{ stars(review.rating) }</div>
                <span>{ format!("{}.0", review.rating) }</span>
            </div>
            <p class="review-text">{ format!("\"{}\"", review.text) }</p>
            <div class="reviewer">
                <div class="icon-circle small" style={format!("background: {};", review.color)}>
                    <i class="fas fa-user"></i>
                </div>
                <div>
                    <h4>{ &review.name }</h4>
                    <p>{ &review.title }</p>
                </div>
            </div>
        </div>
    }
}

#[function_component(Reviews)]
pub fn reviews(props: &ReviewsProps) -> Html {
    let reviews = &props.config.reviews;

    html! {
        <section id="reviews" class="page-section reviews">
            <div class="section-inner">
                <div class="section-header">
                    <h2>{ &reviews.heading }</h2>
                    <p>{ &reviews.intro }</p>
                </div>
                <div class="card-grid">
                    { for reviews.items.iter().map(review_card) }
                </div>
                <div class="rating-summary">
                    <div class="stars">{ stars(5) }</div>
                    <div>
                        <div class="rating-average">{ &reviews.summary.average }</div>
                        <div class="rating-basis">{ &reviews.summary.basis }</div>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .review-rating {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-bottom: 1rem;
                    color: #666;
                }
                .stars {
                    color: #f5b301;
                    display: flex;
                    gap: 2px;
                }
                .review-text {
                    color: #444;
                    font-style: italic;
                    line-height: 1.6;
                    margin-bottom: 1.5rem;
                }
                .reviewer {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .reviewer h4, .reviewer p {
                    margin: 0;
                }
                .reviewer p {
                    color: #777;
                    font-size: 0.85rem;
                }
                .rating-summary {
                    margin: 3rem auto 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    background: var(--light);
                    border-radius: 12px;
                    padding: 1.5rem 2rem;
                    max-width: 420px;
                }
                .rating-average {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: var(--dark);
                }
                .rating-basis {
                    color: #666;
                }
                "#}
            </style>
        </section>
    }
}
