use serde::Serialize;

/// A fixed point of interest shown by the host's search panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Attraction {
    pub id: u32,
    pub name: &'static str,
}

/// The built-in set of attractions around the default map center.
pub const ATTRACTIONS: [Attraction; 10] = [
    Attraction { id: 1, name: "Eiffel Tower" },
    Attraction { id: 2, name: "Champ de Mars" },
    Attraction { id: 3, name: "Trocadéro Gardens" },
    Attraction { id: 4, name: "Seine River Cruise" },
    Attraction { id: 5, name: "Musée du Quai Branly" },
    Attraction { id: 6, name: "Pont d'Iéna" },
    Attraction { id: 7, name: "Palais de Chaillot" },
    Attraction { id: 8, name: "Rue Cler Market Street" },
    Attraction { id: 9, name: "Les Invalides" },
    Attraction { id: 10, name: "Bir-Hakeim Bridge" },
];

/// Case-insensitive substring filter over the attraction list.
/// An empty query matches everything, in list order.
pub fn search(query: &str) -> Vec<&'static Attraction> {
    let query = query.to_lowercase();
    ATTRACTIONS
        .iter()
        .filter(|a| a.name.to_lowercase().contains(&query))
        .collect()
}
