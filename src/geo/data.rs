//! Built-in reference tables: countries, country aliases and land borders.
//!
//! Table order is significant. City names are not unique across countries,
//! and city-to-country inference returns the first country that lists a city.

use serde::Serialize;

/// A country as shown in pickers and listing cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Country {
    /// Canonical display name.
    pub name: &'static str,
    pub dial_code: &'static str,
    pub flag: &'static str,
    /// Known cities and districts, most prominent first.
    pub cities: &'static [&'static str],
}

pub(crate) const COUNTRIES: &[Country] = &[
    Country {
        name: "Côte d'Ivoire",
        dial_code: "+225",
        flag: "\u{1F1E8}\u{1F1EE}",
        cities: &[
            "Abidjan", "Yamoussoukro", "Bouaké", "Daloa", "San-Pédro", "Korhogo", "Man",
            "Gagnoa", "Divo", "Abengourou", "Grand-Bassam", "Bingerville", "Anyama",
            "Cocody", "Yopougon", "Marcory", "Treichville", "Plateau", "Adjamé", "Abobo",
            "Koumassi", "Port-Bouët", "Songon",
        ],
    },
    Country {
        name: "Sénégal",
        dial_code: "+221",
        flag: "\u{1F1F8}\u{1F1F3}",
        cities: &[
            "Dakar", "Thiès", "Saint-Louis", "Touba", "Kaolack", "Ziguinchor", "Mbour",
            "Rufisque", "Diourbel", "Tambacounda",
        ],
    },
    Country {
        name: "Mali",
        dial_code: "+223",
        flag: "\u{1F1F2}\u{1F1F1}",
        cities: &["Bamako", "Sikasso", "Ségou", "Mopti", "Kayes", "Koutiala", "Gao", "Tombouctou"],
    },
    Country {
        name: "Burkina Faso",
        dial_code: "+226",
        flag: "\u{1F1E7}\u{1F1EB}",
        cities: &["Ouagadougou", "Bobo-Dioulasso", "Koudougou", "Banfora", "Ouahigouya", "Kaya"],
    },
    Country {
        name: "Ghana",
        dial_code: "+233",
        flag: "\u{1F1EC}\u{1F1ED}",
        cities: &["Accra", "Kumasi", "Tamale", "Takoradi", "Cape Coast", "Tema"],
    },
    Country {
        name: "Guinée",
        dial_code: "+224",
        flag: "\u{1F1EC}\u{1F1F3}",
        cities: &["Conakry", "Kankan", "Nzérékoré", "Kindia", "Labé"],
    },
    Country {
        name: "Libéria",
        dial_code: "+231",
        flag: "\u{1F1F1}\u{1F1F7}",
        cities: &["Monrovia", "Gbarnga", "Buchanan"],
    },
    Country {
        name: "Togo",
        dial_code: "+228",
        flag: "\u{1F1F9}\u{1F1EC}",
        cities: &["Lomé", "Sokodé", "Kara", "Kpalimé", "Atakpamé"],
    },
    Country {
        name: "Bénin",
        dial_code: "+229",
        flag: "\u{1F1E7}\u{1F1EF}",
        cities: &["Cotonou", "Porto-Novo", "Parakou", "Abomey-Calavi", "Djougou", "Bohicon"],
    },
    Country {
        name: "Niger",
        dial_code: "+227",
        flag: "\u{1F1F3}\u{1F1EA}",
        cities: &["Niamey", "Zinder", "Maradi", "Agadez", "Tahoua"],
    },
    Country {
        name: "Nigeria",
        dial_code: "+234",
        flag: "\u{1F1F3}\u{1F1EC}",
        cities: &["Lagos", "Abuja", "Kano", "Ibadan", "Port Harcourt"],
    },
    Country {
        name: "Cameroun",
        dial_code: "+237",
        flag: "\u{1F1E8}\u{1F1F2}",
        cities: &["Douala", "Yaoundé", "Bafoussam", "Garoua", "Bamenda"],
    },
    Country {
        name: "Gabon",
        dial_code: "+241",
        flag: "\u{1F1EC}\u{1F1E6}",
        cities: &["Libreville", "Port-Gentil", "Franceville"],
    },
    Country {
        name: "Congo",
        dial_code: "+242",
        flag: "\u{1F1E8}\u{1F1EC}",
        cities: &["Brazzaville", "Pointe-Noire", "Dolisie"],
    },
    Country {
        name: "RD Congo",
        dial_code: "+243",
        flag: "\u{1F1E8}\u{1F1E9}",
        cities: &["Kinshasa", "Lubumbashi", "Goma", "Kisangani", "Mbuji-Mayi"],
    },
    Country {
        name: "Mauritanie",
        dial_code: "+222",
        flag: "\u{1F1F2}\u{1F1F7}",
        cities: &["Nouakchott", "Nouadhibou"],
    },
    Country {
        name: "Gambie",
        dial_code: "+220",
        flag: "\u{1F1EC}\u{1F1F2}",
        cities: &["Banjul", "Serekunda"],
    },
    Country {
        name: "Guinée-Bissau",
        dial_code: "+245",
        flag: "\u{1F1EC}\u{1F1FC}",
        cities: &["Bissau"],
    },
    Country {
        name: "Maroc",
        dial_code: "+212",
        flag: "\u{1F1F2}\u{1F1E6}",
        cities: &["Casablanca", "Rabat", "Marrakech", "Fès", "Tanger", "Agadir"],
    },
    Country {
        name: "Tunisie",
        dial_code: "+216",
        flag: "\u{1F1F9}\u{1F1F3}",
        cities: &["Tunis", "Sfax", "Sousse"],
    },
    Country {
        name: "Algérie",
        dial_code: "+213",
        flag: "\u{1F1E9}\u{1F1FF}",
        cities: &["Alger", "Oran", "Constantine"],
    },
    Country {
        name: "Tchad",
        dial_code: "+235",
        flag: "\u{1F1F9}\u{1F1E9}",
        cities: &["N'Djamena", "Moundou"],
    },
    Country {
        name: "Centrafrique",
        dial_code: "+236",
        flag: "\u{1F1E8}\u{1F1EB}",
        cities: &["Bangui"],
    },
    Country {
        name: "France",
        dial_code: "+33",
        flag: "\u{1F1EB}\u{1F1F7}",
        cities: &["Paris", "Marseille", "Lyon", "Toulouse", "Nice", "Bordeaux", "Lille"],
    },
    Country {
        name: "Belgique",
        dial_code: "+32",
        flag: "\u{1F1E7}\u{1F1EA}",
        cities: &["Bruxelles", "Anvers", "Liège"],
    },
    Country {
        name: "Suisse",
        dial_code: "+41",
        flag: "\u{1F1E8}\u{1F1ED}",
        cities: &["Genève", "Zurich", "Lausanne"],
    },
    Country {
        name: "États-Unis",
        dial_code: "+1",
        flag: "\u{1F1FA}\u{1F1F8}",
        cities: &["New York", "Washington", "Atlanta", "Houston"],
    },
    Country {
        name: "Canada",
        dial_code: "+1",
        flag: "\u{1F1E8}\u{1F1E6}",
        cities: &["Montréal", "Québec", "Toronto", "Ottawa"],
    },
];

/// Alternate spellings, keyed by their normalized form.
pub(crate) const COUNTRY_ALIASES: &[(&str, &str)] = &[
    ("ivory coast", "Côte d'Ivoire"),
    ("cote d ivoire", "Côte d'Ivoire"),
    ("cote divoire", "Côte d'Ivoire"),
    ("rci", "Côte d'Ivoire"),
    ("senegal", "Sénégal"),
    ("guinea", "Guinée"),
    ("guinee conakry", "Guinée"),
    ("liberia", "Libéria"),
    ("benin", "Bénin"),
    ("cameroon", "Cameroun"),
    ("congo brazzaville", "Congo"),
    ("republic of the congo", "Congo"),
    ("rdc", "RD Congo"),
    ("drc", "RD Congo"),
    ("dr congo", "RD Congo"),
    ("congo kinshasa", "RD Congo"),
    ("republique democratique du congo", "RD Congo"),
    ("democratic republic of the congo", "RD Congo"),
    ("mauritania", "Mauritanie"),
    ("gambia", "Gambie"),
    ("the gambia", "Gambie"),
    ("guinea bissau", "Guinée-Bissau"),
    ("morocco", "Maroc"),
    ("tunisia", "Tunisie"),
    ("algeria", "Algérie"),
    ("chad", "Tchad"),
    ("central african republic", "Centrafrique"),
    ("republique centrafricaine", "Centrafrique"),
    ("rca", "Centrafrique"),
    ("belgium", "Belgique"),
    ("switzerland", "Suisse"),
    ("usa", "États-Unis"),
    ("united states", "États-Unis"),
    ("united states of america", "États-Unis"),
];

/// Land borders, as authored. Lookups are directed: only the first
/// country's row is consulted.
pub(crate) const NEIGHBORS: &[(&str, &[&str])] = &[
    ("Côte d'Ivoire", &["Ghana", "Libéria", "Guinée", "Mali", "Burkina Faso"]),
    ("Sénégal", &["Mauritanie", "Mali", "Guinée", "Guinée-Bissau", "Gambie"]),
    (
        "Mali",
        &["Sénégal", "Mauritanie", "Algérie", "Niger", "Burkina Faso", "Côte d'Ivoire", "Guinée"],
    ),
    ("Burkina Faso", &["Mali", "Niger", "Bénin", "Togo", "Ghana", "Côte d'Ivoire"]),
    ("Ghana", &["Côte d'Ivoire", "Burkina Faso", "Togo"]),
    ("Guinée", &["Guinée-Bissau", "Sénégal", "Mali", "Côte d'Ivoire", "Libéria"]),
    ("Libéria", &["Guinée", "Côte d'Ivoire"]),
    ("Togo", &["Ghana", "Burkina Faso", "Bénin"]),
    ("Bénin", &["Togo", "Burkina Faso", "Niger", "Nigeria"]),
    ("Niger", &["Mali", "Algérie", "Tchad", "Nigeria", "Bénin", "Burkina Faso"]),
    ("Nigeria", &["Bénin", "Niger", "Tchad", "Cameroun"]),
    ("Cameroun", &["Nigeria", "Tchad", "Centrafrique", "Congo", "Gabon"]),
    ("Gabon", &["Cameroun", "Congo"]),
    ("Congo", &["Gabon", "Cameroun", "Centrafrique", "RD Congo"]),
    ("RD Congo", &["Congo", "Centrafrique"]),
    ("Mauritanie", &["Sénégal", "Mali", "Algérie"]),
    ("Gambie", &["Sénégal"]),
    ("Guinée-Bissau", &["Sénégal", "Guinée"]),
    ("Maroc", &["Algérie"]),
    ("Tunisie", &["Algérie"]),
    ("Algérie", &["Maroc", "Tunisie", "Mauritanie", "Mali", "Niger"]),
    ("Tchad", &["Niger", "Nigeria", "Cameroun", "Centrafrique"]),
    ("Centrafrique", &["Tchad", "Cameroun", "Congo", "RD Congo"]),
    ("France", &["Belgique", "Suisse"]),
    ("Belgique", &["France"]),
    ("Suisse", &["France"]),
    ("États-Unis", &["Canada"]),
    ("Canada", &["États-Unis"]),
];
