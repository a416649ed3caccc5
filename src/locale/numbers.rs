//! Cardinal number words for locales that ship a numeral-to-word table.
//!
//! Coverage is 0..=100, the range used for spelled-out answer variants.

/// Largest value any speller covers.
pub const MAX_SPELLED: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberSpeller {
    English,
    Spanish,
    French,
    German,
    Italian,
    Portuguese,
    /// Shared by Chinese and Japanese
    Hanzi,
    /// Sino-Korean numerals
    Korean,
}

impl NumberSpeller {
    /// Spell `n`, or `None` above [`MAX_SPELLED`].
    pub fn spell(&self, n: u32) -> Option<String> {
        if n > MAX_SPELLED {
            return None;
        }
        Some(match self {
            NumberSpeller::English => english(n),
            NumberSpeller::Spanish => spanish(n),
            NumberSpeller::French => french(n),
            NumberSpeller::German => german(n),
            NumberSpeller::Italian => italian(n),
            NumberSpeller::Portuguese => portuguese(n),
            NumberSpeller::Hanzi => sinographic(n, &HANZI),
            NumberSpeller::Korean => sinographic(n, &KOREAN),
        })
    }

    /// Reverse lookup: the value whose spelling equals `word` once both are
    /// passed through `normalize`.
    pub fn parse(&self, word: &str, normalize: impl Fn(&str) -> String) -> Option<u32> {
        (0..=MAX_SPELLED).find(|&n| {
            self.spell(n)
                .map(|spelled| normalize(&spelled) == word)
                .unwrap_or(false)
        })
    }
}

// ==================== English ====================

const EN_ONES: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen",
];

const EN_TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

fn english(n: u32) -> String {
    match n {
        0..=19 => EN_ONES[n as usize].to_string(),
        100 => "one hundred".to_string(),
        _ if n % 10 == 0 => EN_TENS[(n / 10) as usize].to_string(),
        _ => format!("{}-{}", EN_TENS[(n / 10) as usize], EN_ONES[(n % 10) as usize]),
    }
}

// ==================== Spanish ====================

const ES_TO_29: [&str; 30] = [
    "cero", "uno", "dos", "tres", "cuatro", "cinco", "seis", "siete", "ocho", "nueve", "diez",
    "once", "doce", "trece", "catorce", "quince", "dieciséis", "diecisiete", "dieciocho",
    "diecinueve", "veinte", "veintiuno", "veintidós", "veintitrés", "veinticuatro",
    "veinticinco", "veintiséis", "veintisiete", "veintiocho", "veintinueve",
];

const ES_TENS: [&str; 10] = [
    "", "", "", "treinta", "cuarenta", "cincuenta", "sesenta", "setenta", "ochenta", "noventa",
];

fn spanish(n: u32) -> String {
    match n {
        0..=29 => ES_TO_29[n as usize].to_string(),
        100 => "cien".to_string(),
        _ if n % 10 == 0 => ES_TENS[(n / 10) as usize].to_string(),
        _ => format!("{} y {}", ES_TENS[(n / 10) as usize], ES_TO_29[(n % 10) as usize]),
    }
}

// ==================== French ====================

const FR_TO_16: [&str; 17] = [
    "zéro", "un", "deux", "trois", "quatre", "cinq", "six", "sept", "huit", "neuf", "dix", "onze",
    "douze", "treize", "quatorze", "quinze", "seize",
];

const FR_TENS: [&str; 7] = ["", "", "vingt", "trente", "quarante", "cinquante", "soixante"];

fn french(n: u32) -> String {
    match n {
        0..=16 => FR_TO_16[n as usize].to_string(),
        17..=19 => format!("dix-{}", FR_TO_16[(n - 10) as usize]),
        20..=69 => {
            let tens = FR_TENS[(n / 10) as usize];
            match n % 10 {
                0 => tens.to_string(),
                1 => format!("{} et un", tens),
                unit => format!("{}-{}", tens, FR_TO_16[unit as usize]),
            }
        }
        71 => "soixante et onze".to_string(),
        70..=79 => format!("soixante-{}", french(n - 60)),
        80 => "quatre-vingts".to_string(),
        81..=99 => format!("quatre-vingt-{}", french(n - 80)),
        _ => "cent".to_string(),
    }
}

// ==================== German ====================

const DE_ONES: [&str; 20] = [
    "null", "eins", "zwei", "drei", "vier", "fünf", "sechs", "sieben", "acht", "neun", "zehn",
    "elf", "zwölf", "dreizehn", "vierzehn", "fünfzehn", "sechzehn", "siebzehn", "achtzehn",
    "neunzehn",
];

const DE_TENS: [&str; 10] = [
    "", "", "zwanzig", "dreißig", "vierzig", "fünfzig", "sechzig", "siebzig", "achtzig",
    "neunzig",
];

fn german(n: u32) -> String {
    match n {
        0..=19 => DE_ONES[n as usize].to_string(),
        100 => "hundert".to_string(),
        _ if n % 10 == 0 => DE_TENS[(n / 10) as usize].to_string(),
        _ => {
            let unit = if n % 10 == 1 {
                "ein"
            } else {
                DE_ONES[(n % 10) as usize]
            };
            format!("{}und{}", unit, DE_TENS[(n / 10) as usize])
        }
    }
}

// ==================== Italian ====================

const IT_ONES: [&str; 20] = [
    "zero", "uno", "due", "tre", "quattro", "cinque", "sei", "sette", "otto", "nove", "dieci",
    "undici", "dodici", "tredici", "quattordici", "quindici", "sedici", "diciassette", "diciotto",
    "diciannove",
];

const IT_TENS: [&str; 10] = [
    "", "", "venti", "trenta", "quaranta", "cinquanta", "sessanta", "settanta", "ottanta",
    "novanta",
];

fn italian(n: u32) -> String {
    match n {
        0..=19 => IT_ONES[n as usize].to_string(),
        100 => "cento".to_string(),
        _ => {
            let tens = IT_TENS[(n / 10) as usize];
            match n % 10 {
                0 => tens.to_string(),
                // Tens drop their final vowel before uno and otto.
                1 | 8 => format!("{}{}", &tens[..tens.len() - 1], IT_ONES[(n % 10) as usize]),
                3 => format!("{}tré", tens),
                unit => format!("{}{}", tens, IT_ONES[unit as usize]),
            }
        }
    }
}

// ==================== Portuguese ====================

const PT_ONES: [&str; 20] = [
    "zero", "um", "dois", "três", "quatro", "cinco", "seis", "sete", "oito", "nove", "dez",
    "onze", "doze", "treze", "catorze", "quinze", "dezesseis", "dezessete", "dezoito", "dezenove",
];

const PT_TENS: [&str; 10] = [
    "", "", "vinte", "trinta", "quarenta", "cinquenta", "sessenta", "setenta", "oitenta",
    "noventa",
];

fn portuguese(n: u32) -> String {
    match n {
        0..=19 => PT_ONES[n as usize].to_string(),
        100 => "cem".to_string(),
        _ if n % 10 == 0 => PT_TENS[(n / 10) as usize].to_string(),
        _ => format!("{} e {}", PT_TENS[(n / 10) as usize], PT_ONES[(n % 10) as usize]),
    }
}

// ==================== Sinographic ====================

struct Sinographic {
    digits: [&'static str; 10],
    ten: &'static str,
    hundred: &'static str,
}

const HANZI: Sinographic = Sinographic {
    digits: ["零", "一", "二", "三", "四", "五", "六", "七", "八", "九"],
    ten: "十",
    hundred: "一百",
};

const KOREAN: Sinographic = Sinographic {
    digits: ["영", "일", "이", "삼", "사", "오", "육", "칠", "팔", "구"],
    ten: "십",
    hundred: "백",
};

fn sinographic(n: u32, table: &Sinographic) -> String {
    if n == 100 {
        return table.hundred.to_string();
    }
    if n < 10 {
        return table.digits[n as usize].to_string();
    }

    let mut out = String::new();
    if n / 10 > 1 {
        out.push_str(table.digits[(n / 10) as usize]);
    }
    out.push_str(table.ten);
    if n % 10 != 0 {
        out.push_str(table.digits[(n % 10) as usize]);
    }
    out
}
