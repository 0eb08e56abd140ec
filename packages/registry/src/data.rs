//! Per-country IBAN structures.
//!
//! One entry per IBAN-using country: the anchored pattern over the full
//! IBAN (country code, check digits, BBAN) with one capture group per
//! logical field, and the field names in capture-group order. Group 1
//! is always the check digits.
//!
//! Structures follow the ISO 13616 registry. The field granularity
//! (what counts as bank code, branch code, national check digits and so
//! on) follows each country's national BBAN definition.

/// (country code, anchored pattern, field names in capture-group order)
pub(crate) type CountrySpec = (&'static str, &'static str, &'static [&'static str]);

const BANK_ACCOUNT: &[&str] = &["check_digits", "bank_code", "account_number"];

const BANK_BRANCH_ACCOUNT: &[&str] =
    &["check_digits", "bank_code", "branch_code", "account_number"];

const BANK_ACCOUNT_CHECK: &[&str] = &[
    "check_digits",
    "bank_code",
    "account_number",
    "national_check_digit",
];

const BANK_ACCOUNT_CHECKS: &[&str] = &[
    "check_digits",
    "bank_code",
    "account_number",
    "national_check_digits",
];

const BANK_BRANCH_ACCOUNT_CHECKS: &[&str] = &[
    "check_digits",
    "bank_code",
    "branch_code",
    "account_number",
    "national_check_digits",
];

/// Countries in ISO-3166 alpha-2 order.
pub(crate) const COUNTRY_SPECS: &[CountrySpec] = &[
    // Andorra
    (
        "AD",
        r"^AD(\d{2})(\d{4})(\d{4})([A-Z0-9]{12})$",
        BANK_BRANCH_ACCOUNT,
    ),
    // United Arab Emirates
    ("AE", r"^AE(\d{2})(\d{3})(\d{16})$", BANK_ACCOUNT),
    // Albania
    (
        "AL",
        r"^AL(\d{2})(\d{3})(\d{4})(\d)([A-Z0-9]{16})$",
        &[
            "check_digits",
            "bank_code",
            "branch_code",
            "national_check_digit",
            "account_number",
        ],
    ),
    // Austria
    ("AT", r"^AT(\d{2})(\d{5})(\d{11})$", BANK_ACCOUNT),
    // Azerbaijan
    (
        "AZ",
        r"^AZ(\d{2})([A-Z]{4})([A-Z0-9]{20})$",
        BANK_ACCOUNT,
    ),
    // Bosnia and Herzegovina
    (
        "BA",
        r"^BA(\d{2})(\d{3})(\d{3})(\d{8})(\d{2})$",
        BANK_BRANCH_ACCOUNT_CHECKS,
    ),
    // Belgium
    (
        "BE",
        r"^BE(\d{2})(\d{3})(\d{7})(\d{2})$",
        BANK_ACCOUNT_CHECKS,
    ),
    // Bulgaria
    (
        "BG",
        r"^BG(\d{2})([A-Z]{4})(\d{4})(\d{2})([A-Z0-9]{8})$",
        &[
            "check_digits",
            "bank_code",
            "branch_code",
            "account_type",
            "account_number",
        ],
    ),
    // Bahrain
    (
        "BH",
        r"^BH(\d{2})([A-Z]{4})([A-Z0-9]{14})$",
        BANK_ACCOUNT,
    ),
    // Brazil
    (
        "BR",
        r"^BR(\d{2})(\d{8})(\d{5})(\d{10})([A-Z])([A-Z0-9])$",
        &[
            "check_digits",
            "bank_code",
            "branch_code",
            "account_number",
            "account_type",
            "owner_type",
        ],
    ),
    // Switzerland
    (
        "CH",
        r"^CH(\d{2})(\d{5})([A-Z0-9]{12})$",
        BANK_ACCOUNT,
    ),
    // Costa Rica
    ("CR", r"^CR(\d{2})(\d{4})(\d{14})$", BANK_ACCOUNT),
    // Cyprus
    (
        "CY",
        r"^CY(\d{2})(\d{3})(\d{5})([A-Z0-9]{16})$",
        BANK_BRANCH_ACCOUNT,
    ),
    // Czechia
    (
        "CZ",
        r"^CZ(\d{2})(\d{4})(\d{6})(\d{10})$",
        &[
            "check_digits",
            "bank_code",
            "account_prefix",
            "account_number",
        ],
    ),
    // Germany
    ("DE", r"^DE(\d{2})(\d{8})(\d{10})$", BANK_ACCOUNT),
    // Denmark
    (
        "DK",
        r"^DK(\d{2})(\d{4})(\d{9})(\d)$",
        BANK_ACCOUNT_CHECK,
    ),
    // Dominican Republic
    (
        "DO",
        r"^DO(\d{2})([A-Z0-9]{4})(\d{20})$",
        BANK_ACCOUNT,
    ),
    // Estonia
    (
        "EE",
        r"^EE(\d{2})(\d{2})(\d{2})(\d{11})(\d)$",
        &[
            "check_digits",
            "bank_code",
            "branch_code",
            "account_number",
            "national_check_digit",
        ],
    ),
    // Spain
    (
        "ES",
        r"^ES(\d{2})(\d{4})(\d{4})(\d{2})(\d{10})$",
        &[
            "check_digits",
            "bank_code",
            "branch_code",
            "national_check_digits",
            "account_number",
        ],
    ),
    // Finland
    (
        "FI",
        r"^FI(\d{2})(\d{6})(\d{7})(\d)$",
        BANK_ACCOUNT_CHECK,
    ),
    // Faroe Islands
    (
        "FO",
        r"^FO(\d{2})(\d{4})(\d{9})(\d)$",
        BANK_ACCOUNT_CHECK,
    ),
    // France
    (
        "FR",
        r"^FR(\d{2})(\d{5})(\d{5})([A-Z0-9]{11})(\d{2})$",
        BANK_BRANCH_ACCOUNT_CHECKS,
    ),
    // United Kingdom
    (
        "GB",
        r"^GB(\d{2})([A-Z]{4})(\d{6})(\d{8})$",
        &["check_digits", "bank_code", "sort_code", "account_number"],
    ),
    // Georgia
    ("GE", r"^GE(\d{2})([A-Z]{2})(\d{16})$", BANK_ACCOUNT),
    // Gibraltar
    (
        "GI",
        r"^GI(\d{2})([A-Z]{4})([A-Z0-9]{15})$",
        BANK_ACCOUNT,
    ),
    // Greenland
    (
        "GL",
        r"^GL(\d{2})(\d{4})(\d{9})(\d)$",
        BANK_ACCOUNT_CHECK,
    ),
    // Greece
    (
        "GR",
        r"^GR(\d{2})(\d{3})(\d{4})([A-Z0-9]{16})$",
        BANK_BRANCH_ACCOUNT,
    ),
    // Guatemala
    (
        "GT",
        r"^GT(\d{2})([A-Z0-9]{4})([A-Z0-9]{2})([A-Z0-9]{2})([A-Z0-9]{16})$",
        &[
            "check_digits",
            "bank_code",
            "currency_code",
            "account_type",
            "account_number",
        ],
    ),
    // Croatia
    ("HR", r"^HR(\d{2})(\d{7})(\d{10})$", BANK_ACCOUNT),
    // Hungary
    (
        "HU",
        r"^HU(\d{2})(\d{3})(\d{4})(\d)(\d{15})(\d)$",
        &[
            "check_digits",
            "bank_code",
            "branch_code",
            "branch_check_digit",
            "account_number",
            "national_check_digit",
        ],
    ),
    // Ireland
    (
        "IE",
        r"^IE(\d{2})([A-Z]{4})(\d{6})(\d{8})$",
        &["check_digits", "bank_code", "sort_code", "account_number"],
    ),
    // Israel
    (
        "IL",
        r"^IL(\d{2})(\d{3})(\d{3})(\d{13})$",
        BANK_BRANCH_ACCOUNT,
    ),
    // Iceland
    (
        "IS",
        r"^IS(\d{2})(\d{2})(\d{2})(\d{2})(\d{6})(\d{10})$",
        &[
            "check_digits",
            "bank_code",
            "branch_code",
            "account_type",
            "account_number",
            "identification_number",
        ],
    ),
    // Italy
    (
        "IT",
        r"^IT(\d{2})([A-Z])(\d{5})(\d{5})([A-Z0-9]{12})$",
        &[
            "check_digits",
            "national_check_digit",
            "bank_code",
            "branch_code",
            "account_number",
        ],
    ),
    // Jordan
    (
        "JO",
        r"^JO(\d{2})([A-Z]{4})(\d{4})([A-Z0-9]{18})$",
        BANK_BRANCH_ACCOUNT,
    ),
    // Kuwait
    (
        "KW",
        r"^KW(\d{2})([A-Z]{4})([A-Z0-9]{22})$",
        BANK_ACCOUNT,
    ),
    // Kazakhstan
    ("KZ", r"^KZ(\d{2})(\d{3})([A-Z0-9]{13})$", BANK_ACCOUNT),
    // Lebanon
    ("LB", r"^LB(\d{2})(\d{4})([A-Z0-9]{20})$", BANK_ACCOUNT),
    // Saint Lucia
    (
        "LC",
        r"^LC(\d{2})([A-Z]{4})([A-Z0-9]{24})$",
        BANK_ACCOUNT,
    ),
    // Liechtenstein
    (
        "LI",
        r"^LI(\d{2})(\d{5})([A-Z0-9]{12})$",
        BANK_ACCOUNT,
    ),
    // Lithuania
    ("LT", r"^LT(\d{2})(\d{5})(\d{11})$", BANK_ACCOUNT),
    // Luxembourg
    ("LU", r"^LU(\d{2})(\d{3})([A-Z0-9]{13})$", BANK_ACCOUNT),
    // Latvia
    (
        "LV",
        r"^LV(\d{2})([A-Z]{4})([A-Z0-9]{13})$",
        BANK_ACCOUNT,
    ),
    // Monaco
    (
        "MC",
        r"^MC(\d{2})(\d{5})(\d{5})([A-Z0-9]{11})(\d{2})$",
        BANK_BRANCH_ACCOUNT_CHECKS,
    ),
    // Moldova
    (
        "MD",
        r"^MD(\d{2})([A-Z0-9]{2})([A-Z0-9]{18})$",
        BANK_ACCOUNT,
    ),
    // Montenegro
    (
        "ME",
        r"^ME(\d{2})(\d{3})(\d{13})(\d{2})$",
        BANK_ACCOUNT_CHECKS,
    ),
    // North Macedonia
    (
        "MK",
        r"^MK(\d{2})(\d{3})([A-Z0-9]{10})(\d{2})$",
        BANK_ACCOUNT_CHECKS,
    ),
    // Mauritania
    (
        "MR",
        r"^MR(\d{2})(\d{5})(\d{5})(\d{11})(\d{2})$",
        BANK_BRANCH_ACCOUNT_CHECKS,
    ),
    // Malta
    (
        "MT",
        r"^MT(\d{2})([A-Z]{4})(\d{5})([A-Z0-9]{18})$",
        BANK_BRANCH_ACCOUNT,
    ),
    // Mauritius
    (
        "MU",
        r"^MU(\d{2})([A-Z]{4}\d{2})(\d{2})(\d{15})([A-Z]{3})$",
        &[
            "check_digits",
            "bank_code",
            "branch_code",
            "account_number",
            "currency_code",
        ],
    ),
    // Netherlands
    ("NL", r"^NL(\d{2})([A-Z]{4})(\d{10})$", BANK_ACCOUNT),
    // Norway
    (
        "NO",
        r"^NO(\d{2})(\d{4})(\d{6})(\d)$",
        BANK_ACCOUNT_CHECK,
    ),
    // Pakistan
    (
        "PK",
        r"^PK(\d{2})([A-Z]{4})([A-Z0-9]{16})$",
        BANK_ACCOUNT,
    ),
    // Poland
    (
        "PL",
        r"^PL(\d{2})(\d{3})(\d{4})(\d)(\d{16})$",
        &[
            "check_digits",
            "bank_code",
            "branch_code",
            "national_check_digit",
            "account_number",
        ],
    ),
    // Palestine
    (
        "PS",
        r"^PS(\d{2})([A-Z]{4})([A-Z0-9]{21})$",
        BANK_ACCOUNT,
    ),
    // Portugal
    (
        "PT",
        r"^PT(\d{2})(\d{4})(\d{4})(\d{11})(\d{2})$",
        BANK_BRANCH_ACCOUNT_CHECKS,
    ),
    // Qatar
    (
        "QA",
        r"^QA(\d{2})([A-Z]{4})([A-Z0-9]{21})$",
        BANK_ACCOUNT,
    ),
    // Romania
    (
        "RO",
        r"^RO(\d{2})([A-Z]{4})([A-Z0-9]{16})$",
        BANK_ACCOUNT,
    ),
    // Serbia
    (
        "RS",
        r"^RS(\d{2})(\d{3})(\d{13})(\d{2})$",
        BANK_ACCOUNT_CHECKS,
    ),
    // Saudi Arabia
    (
        "SA",
        r"^SA(\d{2})(\d{2})([A-Z0-9]{18})$",
        BANK_ACCOUNT,
    ),
    // Sweden
    (
        "SE",
        r"^SE(\d{2})(\d{3})(\d{16})(\d)$",
        BANK_ACCOUNT_CHECK,
    ),
    // Slovenia
    (
        "SI",
        r"^SI(\d{2})(\d{2})(\d{3})(\d{8})(\d{2})$",
        BANK_BRANCH_ACCOUNT_CHECKS,
    ),
    // Slovakia
    ("SK", r"^SK(\d{2})(\d{4})(\d{16})$", BANK_ACCOUNT),
    // San Marino
    (
        "SM",
        r"^SM(\d{2})([A-Z])(\d{5})(\d{5})([A-Z0-9]{12})$",
        &[
            "check_digits",
            "national_check_digit",
            "bank_code",
            "branch_code",
            "account_number",
        ],
    ),
    // Sao Tome and Principe
    (
        "ST",
        r"^ST(\d{2})(\d{4})(\d{4})(\d{11})(\d{2})$",
        BANK_BRANCH_ACCOUNT_CHECKS,
    ),
    // Timor-Leste
    (
        "TL",
        r"^TL(\d{2})(\d{3})(\d{14})(\d{2})$",
        BANK_ACCOUNT_CHECKS,
    ),
    // Tunisia
    (
        "TN",
        r"^TN(\d{2})(\d{2})(\d{3})(\d{13})(\d{2})$",
        BANK_BRANCH_ACCOUNT_CHECKS,
    ),
    // Turkey
    (
        "TR",
        r"^TR(\d{2})(\d{5})(\d)([A-Z0-9]{16})$",
        &[
            "check_digits",
            "bank_code",
            "reserved_digit",
            "account_number",
        ],
    ),
    // British Virgin Islands
    ("VG", r"^VG(\d{2})([A-Z]{4})(\d{16})$", BANK_ACCOUNT),
    // Kosovo
    (
        "XK",
        r"^XK(\d{2})(\d{2})(\d{2})(\d{10})(\d{2})$",
        BANK_BRANCH_ACCOUNT_CHECKS,
    ),
];
