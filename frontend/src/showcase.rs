//! Component showcase sections.
//!
//! Each section carries an anchor id so the header and sidebar links
//! can jump to it.

use crate::dataflow::Atom;
use moonzoon_basalt_ui::*;
use zoon::*;

pub fn showcase() -> impl Element {
    Column::new()
        .s(Width::fill())
        .s(Padding::new().x(SPACING_32).y(SPACING_24))
        .s(Gap::new().y(SPACING_48))
        .item(intro())
        .item(components_section())
        .item(tokens_section())
        .item(typography_section())
        .item(charts_section())
}

fn intro() -> impl Element {
    Column::new()
        .s(Gap::new().y(SPACING_12))
        .item(h1("Basalt UI"))
        .item(lead(
            "A themeable component kit. Every color below is a reactive \
             token, so switching the theme restyles the whole page.",
        ))
}

fn section<E: Element>(id: &str, title: &str, content: E) -> impl Element + use<E> {
    let id = id.to_owned();
    Column::new()
        .s(Gap::new().y(SPACING_16))
        .update_raw_el(move |raw_el| raw_el.attr("id", &id))
        .item(h2(title))
        .item(content)
}

fn components_section() -> impl Element {
    section(
        "components",
        "Components",
        Column::new()
            .s(Gap::new().y(SPACING_24))
            .item(button_gallery())
            .item(badge_gallery())
            .item(form_demo())
            .item(card_gallery()),
    )
}

fn button_gallery() -> impl Element {
    let variants = [
        (ButtonVariant::Primary, "Primary"),
        (ButtonVariant::Secondary, "Secondary"),
        (ButtonVariant::Outline, "Outline"),
        (ButtonVariant::Ghost, "Ghost"),
        (ButtonVariant::Link, "Link"),
        (ButtonVariant::Destructive, "Destructive"),
    ];

    let mut row = Row::new()
        .s(Gap::new().x(SPACING_12).y(SPACING_12))
        .multiline();
    for (variant, label) in variants {
        row = row.item(button().label(label).variant(variant).build());
    }

    Column::new()
        .s(Gap::new().y(SPACING_12))
        .item(h3("Buttons"))
        .item(row)
        .item(
            Row::new()
                .s(Gap::new().x(SPACING_12))
                .item(
                    button()
                        .label("Small")
                        .size(ButtonSize::Small)
                        .variant(ButtonVariant::Secondary)
                        .build(),
                )
                .item(
                    button()
                        .label("Medium")
                        .size(ButtonSize::Medium)
                        .variant(ButtonVariant::Secondary)
                        .build(),
                )
                .item(
                    button()
                        .label("Large")
                        .size(ButtonSize::Large)
                        .variant(ButtonVariant::Secondary)
                        .build(),
                )
                .item(
                    button()
                        .label("Disabled")
                        .disabled(true)
                        .build(),
                ),
        )
}

fn badge_gallery() -> impl Element {
    let variants = [
        (BadgeVariant::Neutral, "Neutral"),
        (BadgeVariant::Primary, "Primary"),
        (BadgeVariant::Success, "Success"),
        (BadgeVariant::Warning, "Warning"),
        (BadgeVariant::Error, "Error"),
    ];

    let mut row = Row::new().s(Gap::new().x(SPACING_8));
    for (variant, label) in variants {
        row = row.item(badge(label).variant(variant).build());
    }

    Column::new()
        .s(Gap::new().y(SPACING_12))
        .item(h3("Badges"))
        .item(row)
}

fn form_demo() -> impl Element {
    Column::new()
        .s(Gap::new().y(SPACING_12))
        .s(Width::exact(360))
        .item(h3("Inputs"))
        .item(
            input("showcase-email")
                .label("Email")
                .placeholder("you@example.com")
                .build(),
        )
        .item(
            input("showcase-username")
                .label("Username")
                .error("Username is already taken")
                .build(),
        )
}

fn card_gallery() -> impl Element {
    Column::new()
        .s(Gap::new().y(SPACING_12))
        .item(h3("Cards"))
        .item(
            Row::new()
                .s(Gap::new().x(SPACING_16).y(SPACING_16))
                .multiline()
                .item(demo_card(CardVariant::Default, "Default"))
                .item(demo_card(CardVariant::Elevated, "Elevated"))
                .item(demo_card(CardVariant::Outlined, "Outlined"))
                .item(demo_card(CardVariant::Filled, "Filled")),
        )
}

fn demo_card(variant: CardVariant, title: &str) -> impl Element + use<> {
    card()
        .variant(variant)
        .child(
            Column::new()
                .s(Gap::new().y(SPACING_8))
                .s(Width::exact(220))
                .item(h4(title))
                .item(small("Card bodies inherit surface colors from the theme.")),
        )
        .build()
}

fn tokens_section() -> impl Element {
    section(
        "tokens",
        "Tokens",
        Column::new()
            .s(Gap::new().y(SPACING_24))
            .item(color_scale(
                "Primary",
                vec![
                    primary_3().boxed_local(),
                    primary_5().boxed_local(),
                    primary_7().boxed_local(),
                    primary_9().boxed_local(),
                ],
            ))
            .item(color_scale(
                "Neutral",
                vec![
                    neutral_3().boxed_local(),
                    neutral_5().boxed_local(),
                    neutral_8().boxed_local(),
                    neutral_12().boxed_local(),
                ],
            ))
            .item(spacing_scale()),
    )
}

fn color_scale(
    name: &str,
    colors: Vec<std::pin::Pin<Box<dyn Signal<Item = &'static str>>>>,
) -> impl Element + use<> {
    let mut row = Row::new().s(Gap::new().x(SPACING_8));
    for color in colors {
        row = row.item(
            El::new()
                .s(Width::exact(48))
                .s(Height::exact(48))
                .s(RoundedCorners::all(CORNER_RADIUS_8))
                .s(Background::new().color_signal(color)),
        );
    }

    Column::new()
        .s(Gap::new().y(SPACING_8))
        .item(h3(name))
        .item(row)
}

fn spacing_scale() -> impl Element {
    let steps = [SPACING_4, SPACING_8, SPACING_16, SPACING_24, SPACING_32];

    let mut column = Column::new().s(Gap::new().y(SPACING_4));
    for step in steps {
        column = column.item(
            Row::new()
                .s(Gap::new().x(SPACING_12))
                .s(Align::new().center_y())
                .item(
                    El::new()
                        .s(Width::exact(step))
                        .s(Height::exact(12))
                        .s(Background::new().color_signal(primary_6())),
                )
                .item(small(format!("{step}px"))),
        );
    }

    Column::new()
        .s(Gap::new().y(SPACING_8))
        .item(h3("Spacing"))
        .item(column)
}

fn typography_section() -> impl Element {
    section(
        "typography",
        "Typography",
        Column::new()
            .s(Gap::new().y(SPACING_12))
            .item(h1("Heading one"))
            .item(h2("Heading two"))
            .item(h3("Heading three"))
            .item(h4("Heading four"))
            .item(paragraph(
                "Body copy uses the neutral scale so it stays readable in \
                 both themes.",
            ))
            .item(code("cargo mzoon start")),
    )
}

fn charts_section() -> impl Element {
    let sample_count = Atom::new(4_usize);

    section(
        "charts",
        "Charts",
        Column::new()
            .s(Gap::new().y(SPACING_16))
            .item(paragraph(
                "Chart primitives are stubbed out with themed bars while \
                 the plotting backend is under construction.",
            ))
            .item(bar_preview(&sample_count))
            .item(
                Row::new()
                    .s(Gap::new().x(SPACING_12))
                    .item(
                        button()
                            .label("Add sample")
                            .variant(ButtonVariant::Secondary)
                            .size(ButtonSize::Small)
                            .on_press({
                                let sample_count = sample_count.clone();
                                move || {
                                    sample_count.set_neq(
                                        (sample_count.get_cloned() + 1).min(12),
                                    );
                                }
                            })
                            .build(),
                    )
                    .item(badge_count(&sample_count)),
            ),
    )
}

fn bar_preview(sample_count: &Atom<usize>) -> impl Element + use<> {
    Row::new()
        .s(Gap::new().x(SPACING_8))
        .s(Height::exact(96))
        .s(Align::new().bottom())
        .items_signal_vec(sample_count.signal().map(|count| {
            (0..count)
                .map(|index| {
                    El::new()
                        .s(Width::exact(24))
                        .s(Height::exact(24 + (index as u32 % 4) * 20))
                        .s(RoundedCorners::new().top(CORNER_RADIUS_4))
                        .s(Background::new().color_signal(primary_6()))
                })
                .collect::<Vec<_>>()
        }).to_signal_vec())
}

fn badge_count(sample_count: &Atom<usize>) -> impl Element + use<> {
    El::new().child_signal(
        sample_count
            .signal()
            .map(|count| badge(format!("{count} samples")).variant(BadgeVariant::Primary).build().into_element()),
    )
}
