use crate::photographer::Photographer;

pub(crate) fn alex() -> Photographer {
    Photographer {
        id: 1u64.into(),
        name: "Alex Rao".into(),
        location: "Mumbai".into(),
        price: 5000.0,
        rating: 4.5,
        tags: vec!["wedding".into()],
        styles: vec!["candid".into()],
        ..Default::default()
    }
}

pub(crate) fn bhavna() -> Photographer {
    Photographer {
        id: 2u64.into(),
        name: "Bhavna".into(),
        location: "Delhi".into(),
        price: 8000.0,
        rating: 3.8,
        tags: vec!["portrait".into()],
        styles: vec!["studio".into()],
        ..Default::default()
    }
}
