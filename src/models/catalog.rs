//! Static option catalogs for the Kolkata market the app serves.
//!
//! Forms pick from these lists; the matching engine itself compares plain
//! strings and does not consult them.

/// Main locations and their sub-localities.
pub const LOCATIONS: &[(&str, &[&str])] = &[
    (
        "Rajarhat",
        &[
            "Chinar Park",
            "Salua",
            "Dasdrone",
            "Reckjuani",
            "Rajarhat Chowmatha",
            "Rajarhat Main Road",
            "Bishnupur",
            "Patharghata",
            "Other",
        ],
    ),
    (
        "New Town",
        &[
            "Action Area 1",
            "Action Area 2",
            "Action Area 3",
            "Narkelbagan",
            "Ghuni",
            "Mahisbathan",
            "Jatragachi",
            "Other",
        ],
    ),
    (
        "Salt Lake",
        &[
            "Salt Lake Sector-1",
            "Salt Lake Sector-2",
            "Salt Lake Sector-3",
            "Salt Lake Sector-V",
            "Karunamoyee",
            "Other",
        ],
    ),
    (
        "EM Bypass",
        &[
            "Ruby Crossing",
            "VIP Nagar",
            "Kalikapur",
            "Science City Area",
            "Avishikta",
            "Ajoy Nagar",
            "Mukundapur",
            "Other",
        ],
    ),
    (
        "Alipore",
        &[
            "New Alipore",
            "Alipore Road",
            "Belvedere Road",
            "Judges Court Road",
            "Chetla",
            "Burdwan Road",
            "Other",
        ],
    ),
    (
        "Ballygunge",
        &[
            "Ballygunge Phari",
            "Ballygunge Place",
            "Gariahat",
            "Dover Lane",
            "Sunny Park",
            "Ekdalia",
            "Mandeville Gardens",
            "Other",
        ],
    ),
    (
        "Tollygunge",
        &[
            "Tollygunge Metro Area",
            "Siriti More",
            "Karunamoyee",
            "Naktala",
            "Bansdroni",
            "Ranikuthi",
            "Kudghat",
            "Other",
        ],
    ),
    (
        "Garia",
        &[
            "Garia Station",
            "Boral",
            "Mahamayatala",
            "Kavi Nazrul Metro",
            "Patuli Township",
            "Narendrapur",
            "Kamalgazi",
            "Other",
        ],
    ),
    (
        "Jadavpur",
        &[
            "Jadavpur 8B",
            "Sulekha More",
            "Santoshpur",
            "Baghajatin",
            "Jadavpur University Area",
            "Poddar Nagar",
            "Other",
        ],
    ),
    (
        "Behala",
        &[
            "Behala Chowrasta",
            "Sakher Bazar",
            "Parnasree Pally",
            "Taratala",
            "Behala Tram Depot",
            "Barisha",
            "Silpara",
            "Other",
        ],
    ),
    (
        "Dum Dum",
        &[
            "Dum Dum Cantonment",
            "Nagerbazar",
            "Motijheel",
            "Gorabazar",
            "Dum Dum Park",
            "Jessore Road",
            "Other",
        ],
    ),
    (
        "Baguiati",
        &[
            "Kestopur",
            "Teghoria",
            "Joramandir",
            "Baguiati VIP Road Crossing",
            "Aswini Nagar",
            "Other",
        ],
    ),
    (
        "Joka",
        &[
            "IIM Joka Area",
            "Joka Metro",
            "Thakurpukur",
            "Diamond Park",
            "Pailan",
            "Other",
        ],
    ),
    (
        "Howrah",
        &[
            "Shibpur",
            "Kadamtala",
            "Bally",
            "Salkia",
            "Howrah Maidan",
            "Belur",
            "Liluah",
            "Other",
        ],
    ),
    (
        "Uttarpara",
        &[
            "Hindmotor",
            "Makhla",
            "Bhadrakali",
            "Uttarpara Station Road",
            "Other",
        ],
    ),
];

/// BHK and commercial configuration labels offered in requirement forms.
pub const CONFIGURATION_OPTIONS: &[&str] =
    &["1 BHK", "2 BHK", "3 BHK", "4 BHK", "4+ BHK", "Office", "Shop"];

/// Reasons an agent can record when cancelling a client.
pub const CANCEL_REASONS: &[&str] = &[
    "Budget Mismatch",
    "Location Mismatch",
    "No Response",
    "Chose Other Property",
    "Not Interested Anymore",
    "Other",
];

/// Sub-localities of a main location, if it is in the catalog.
pub fn sub_locations_of(main_location: &str) -> Option<&'static [&'static str]> {
    LOCATIONS
        .iter()
        .find(|(main, _)| *main == main_location)
        .map(|(_, subs)| *subs)
}
