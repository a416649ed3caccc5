//! Synonym table: interchangeable surface forms for direction and number words.
//!
//! Each locale maps a canonical token to the abbreviations, single-letter codes
//! and alternate spellings a learner may type instead. Maps are built once from
//! the static lists below; a token's own spelling is never kept among its
//! synonyms and duplicates are dropped.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// How two words are related through the synonym table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SynonymRelation {
    /// One word is listed as a synonym of the other
    Direct,
    /// Both words are synonyms of a common third form
    Shared,
}

/// Synonyms for one locale.
#[derive(Debug, Clone, Default)]
pub struct SynonymMap {
    entries: Vec<(String, Vec<String>)>,
}

impl SynonymMap {
    fn from_static(raw: &[(&str, &[&str])]) -> Self {
        let mut entries: Vec<(String, Vec<String>)> = Vec::new();

        for (token, forms) in raw {
            let token = token.to_lowercase();
            let position = match entries.iter().position(|(key, _)| *key == token) {
                Some(position) => position,
                None => {
                    entries.push((token.clone(), Vec::new()));
                    entries.len() - 1
                }
            };

            let bucket = &mut entries[position].1;
            for form in forms.iter().map(|f| f.to_lowercase()) {
                if form != token && !bucket.contains(&form) {
                    bucket.push(form);
                }
            }
        }

        Self { entries }
    }

    /// Synonyms listed under `token`, exactly as stored.
    pub fn get(&self, token: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(key, _)| key == token)
            .map(|(_, forms)| forms.as_slice())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every form related to `word`: its own synonyms, plus the canonical
    /// tokens that list it as a synonym. Comparison happens after both sides
    /// go through `normalize`.
    pub fn related(&self, word: &str, normalize: &dyn Fn(&str) -> String) -> HashSet<String> {
        let mut related = HashSet::new();

        for (key, forms) in &self.entries {
            let key_norm = normalize(key);
            let forms_norm: Vec<String> = forms.iter().map(|f| normalize(f)).collect();

            if key_norm == word {
                related.extend(forms_norm.iter().cloned());
            }
            if forms_norm.iter().any(|f| f == word) {
                related.insert(key_norm);
            }
        }

        related.remove(word);
        related
    }

    /// Relation between two already-normalized words, checked in both
    /// directions.
    pub fn relation(
        &self,
        input: &str,
        expected: &str,
        normalize: &dyn Fn(&str) -> String,
    ) -> Option<SynonymRelation> {
        if input.is_empty() || expected.is_empty() {
            return None;
        }

        let expected_related = self.related(expected, normalize);
        if expected_related.contains(input) {
            return Some(SynonymRelation::Direct);
        }

        let input_related = self.related(input, normalize);
        if input_related.contains(expected) {
            return Some(SynonymRelation::Direct);
        }

        if expected_related.intersection(&input_related).next().is_some() {
            return Some(SynonymRelation::Shared);
        }

        None
    }
}

/// Synonym maps for every locale that has any.
pub struct SynonymTable {
    maps: HashMap<&'static str, SynonymMap>,
}

static TABLE: OnceLock<SynonymTable> = OnceLock::new();

impl SynonymTable {
    pub fn new() -> Self {
        let maps = RAW_SYNONYMS
            .iter()
            .map(|(code, raw)| (*code, SynonymMap::from_static(raw)))
            .collect();
        Self { maps }
    }

    /// Shared table, built on first use.
    pub fn get() -> &'static SynonymTable {
        TABLE.get_or_init(SynonymTable::new)
    }

    /// Synonyms for `code`; locales without entries get an empty map.
    pub fn for_locale(&self, code: &str) -> &SynonymMap {
        static EMPTY: OnceLock<SynonymMap> = OnceLock::new();
        self.maps
            .get(code)
            .unwrap_or_else(|| EMPTY.get_or_init(SynonymMap::default))
    }
}

impl Default for SynonymTable {
    fn default() -> Self {
        Self::new()
    }
}

// ==================== Static Data ====================

type RawMap = &'static [(&'static str, &'static [&'static str])];

const ENGLISH: RawMap = &[
    ("north", &["n"]),
    ("northeast", &["ne", "north east"]),
    ("east", &["e"]),
    ("southeast", &["se", "south east"]),
    ("south", &["s"]),
    ("southwest", &["sw", "south west"]),
    ("west", &["w"]),
    ("northwest", &["nw", "north west"]),
    ("front", &["forward", "ahead", "in front"]),
    ("back", &["behind", "backward", "backwards"]),
    ("left", &["l"]),
    ("right", &["r"]),
    ("up", &["above", "upward", "upwards"]),
    ("down", &["below", "downward", "downwards"]),
    ("inside", &["in", "within"]),
    ("outside", &["out"]),
    ("zero", &["oh", "nought", "nil"]),
];

const SPANISH: RawMap = &[
    ("norte", &["n"]),
    ("noreste", &["ne", "nordeste"]),
    ("este", &["e"]),
    ("sureste", &["se", "sudeste"]),
    ("sur", &["s"]),
    ("suroeste", &["so", "sudoeste"]),
    ("oeste", &["o"]),
    ("noroeste", &["no"]),
    ("delante", &["adelante", "enfrente"]),
    ("detrás", &["atrás", "detras", "atras"]),
    ("izquierda", &["izq", "i"]),
    ("derecha", &["der", "d"]),
    ("arriba", &["encima"]),
    ("abajo", &["debajo"]),
    ("dentro", &["adentro"]),
    ("fuera", &["afuera"]),
];

const FRENCH: RawMap = &[
    ("nord", &["n"]),
    ("nord-est", &["ne"]),
    ("est", &["e"]),
    ("sud-est", &["se"]),
    ("sud", &["s"]),
    ("sud-ouest", &["so"]),
    ("ouest", &["o", "w"]),
    ("nord-ouest", &["no"]),
    ("devant", &["avant"]),
    ("derrière", &["arrière", "derriere"]),
    ("gauche", &["g"]),
    ("droite", &["d"]),
    ("haut", &["en haut", "dessus"]),
    ("bas", &["en bas", "dessous"]),
    ("dedans", &["intérieur", "à l'intérieur"]),
    ("dehors", &["extérieur", "à l'extérieur"]),
];

const GERMAN: RawMap = &[
    ("norden", &["n", "nord"]),
    ("nordosten", &["no", "nordost"]),
    ("osten", &["o", "ost"]),
    ("südosten", &["so", "südost"]),
    ("süden", &["s", "süd"]),
    ("südwesten", &["sw", "südwest"]),
    ("westen", &["w", "west"]),
    ("nordwesten", &["nw", "nordwest"]),
    ("vorne", &["vorn", "vor"]),
    ("hinten", &["hinter"]),
    ("links", &["l"]),
    ("rechts", &["r"]),
    ("oben", &["hoch", "aufwärts"]),
    ("unten", &["runter", "abwärts"]),
    ("innen", &["drinnen", "innerhalb"]),
    ("außen", &["draußen", "aussen", "außerhalb"]),
    ("zwei", &["zwo"]),
];

const ITALIAN: RawMap = &[
    ("nord", &["n"]),
    ("nord-est", &["ne"]),
    ("est", &["e"]),
    ("sud-est", &["se"]),
    ("sud", &["s"]),
    ("sud-ovest", &["so"]),
    ("ovest", &["o", "w"]),
    ("nord-ovest", &["no"]),
    ("davanti", &["avanti"]),
    ("dietro", &["indietro"]),
    ("sinistra", &["sx"]),
    ("destra", &["dx"]),
    ("su", &["sopra"]),
    ("giù", &["sotto", "giu"]),
    ("dentro", &["interno"]),
    ("fuori", &["esterno"]),
];

const PORTUGUESE: RawMap = &[
    ("norte", &["n"]),
    ("nordeste", &["ne"]),
    ("leste", &["l", "este"]),
    ("sudeste", &["se"]),
    ("sul", &["s"]),
    ("sudoeste", &["so"]),
    ("oeste", &["o"]),
    ("noroeste", &["no"]),
    ("frente", &["adiante", "em frente"]),
    ("trás", &["atrás", "tras"]),
    ("esquerda", &["esq"]),
    ("direita", &["dir"]),
    ("cima", &["acima"]),
    ("baixo", &["abaixo"]),
    ("dentro", &["interior"]),
    ("fora", &["exterior"]),
];

const RUSSIAN: RawMap = &[
    ("север", &["с"]),
    ("северо-восток", &["св"]),
    ("восток", &["в"]),
    ("юго-восток", &["юв"]),
    ("юг", &["ю"]),
    ("юго-запад", &["юз"]),
    ("запад", &["з"]),
    ("северо-запад", &["сз"]),
    ("впереди", &["вперёд", "вперед", "спереди"]),
    ("сзади", &["назад", "позади"]),
    ("слева", &["налево"]),
    ("справа", &["направо"]),
    ("вверху", &["вверх", "наверху"]),
    ("внизу", &["вниз"]),
    ("внутри", &["внутрь"]),
    ("снаружи", &["наружу"]),
];

const CHINESE_SIMPLIFIED: RawMap = &[
    ("北", &["北方", "北边", "北面"]),
    ("东北", &["东北方"]),
    ("东", &["东方", "东边", "东面"]),
    ("东南", &["东南方"]),
    ("南", &["南方", "南边", "南面"]),
    ("西南", &["西南方"]),
    ("西", &["西方", "西边", "西面"]),
    ("西北", &["西北方"]),
    ("前", &["前面", "前边", "前方"]),
    ("后", &["后面", "后边", "后方"]),
    ("左", &["左边", "左面"]),
    ("右", &["右边", "右面"]),
    ("上", &["上面", "上边", "上方"]),
    ("下", &["下面", "下边", "下方"]),
    ("里", &["里面", "里边", "内"]),
    ("外", &["外面", "外边"]),
    ("二", &["两"]),
    ("零", &["〇"]),
];

const CHINESE_TRADITIONAL: RawMap = &[
    ("北", &["北方", "北邊"]),
    ("東北", &["東北方"]),
    ("東", &["東方", "東邊"]),
    ("東南", &["東南方"]),
    ("南", &["南方", "南邊"]),
    ("西南", &["西南方"]),
    ("西", &["西方", "西邊"]),
    ("西北", &["西北方"]),
    ("前", &["前面", "前方"]),
    ("後", &["後面", "後方"]),
    ("左", &["左邊"]),
    ("右", &["右邊"]),
    ("上", &["上面"]),
    ("下", &["下面"]),
    ("裡", &["裡面", "裏", "內"]),
    ("外", &["外面"]),
    ("二", &["兩"]),
    ("零", &["〇"]),
];

const JAPANESE: RawMap = &[
    ("北", &["きた", "ほく"]),
    ("北東", &["ほくとう"]),
    ("東", &["ひがし"]),
    ("南東", &["なんとう"]),
    ("南", &["みなみ"]),
    ("南西", &["なんせい"]),
    ("西", &["にし"]),
    ("北西", &["ほくせい"]),
    ("前", &["まえ"]),
    ("後ろ", &["うしろ", "後"]),
    ("左", &["ひだり"]),
    ("右", &["みぎ"]),
    ("上", &["うえ"]),
    ("下", &["した"]),
    ("中", &["なか", "内"]),
    ("外", &["そと"]),
    ("零", &["〇", "ゼロ"]),
];

const KOREAN: RawMap = &[
    ("북", &["북쪽"]),
    ("북동", &["북동쪽"]),
    ("동", &["동쪽"]),
    ("남동", &["남동쪽"]),
    ("남", &["남쪽"]),
    ("남서", &["남서쪽"]),
    ("서", &["서쪽"]),
    ("북서", &["북서쪽"]),
    ("앞", &["앞쪽"]),
    ("뒤", &["뒤쪽"]),
    ("왼쪽", &["왼편", "좌"]),
    ("오른쪽", &["오른편", "우"]),
    ("위", &["위쪽"]),
    ("아래", &["아래쪽", "밑"]),
    ("안", &["안쪽", "내부"]),
    ("밖", &["바깥", "바깥쪽", "외부"]),
    ("영", &["공"]),
];

const ARABIC: RawMap = &[
    ("شمال", &["الشمال"]),
    ("شمال شرق", &["الشمال الشرقي", "شمال شرقي"]),
    ("شرق", &["الشرق"]),
    ("جنوب شرق", &["الجنوب الشرقي", "جنوب شرقي"]),
    ("جنوب", &["الجنوب"]),
    ("جنوب غرب", &["الجنوب الغربي", "جنوب غربي"]),
    ("غرب", &["الغرب"]),
    ("شمال غرب", &["الشمال الغربي", "شمال غربي"]),
    ("أمام", &["قدام"]),
    ("خلف", &["وراء"]),
    ("يسار", &["اليسار"]),
    ("يمين", &["اليمين"]),
    ("أعلى", &["فوق"]),
    ("أسفل", &["تحت"]),
    ("داخل", &["الداخل"]),
    ("خارج", &["الخارج"]),
];

const HINDI: RawMap = &[
    ("उत्तर", &["उ"]),
    ("उत्तर-पूर्व", &["ईशान"]),
    ("पूर्व", &["पू"]),
    ("दक्षिण-पूर्व", &["आग्नेय"]),
    ("दक्षिण", &["द"]),
    ("दक्षिण-पश्चिम", &["नैऋत्य"]),
    ("पश्चिम", &["प"]),
    ("उत्तर-पश्चिम", &["वायव्य"]),
    ("आगे", &["सामने"]),
    ("पीछे", &["पिछे"]),
    ("बाएँ", &["बाएं", "बायें"]),
    ("दाएँ", &["दाएं", "दायें"]),
    ("ऊपर", &["उपर"]),
    ("नीचे", &["निचे"]),
    ("अंदर", &["भीतर", "अन्दर"]),
    ("बाहर", &["बाहरी"]),
];

const RAW_SYNONYMS: &[(&str, RawMap)] = &[
    ("en-US", ENGLISH),
    ("en-GB", ENGLISH),
    ("es-ES", SPANISH),
    ("fr-FR", FRENCH),
    ("de-DE", GERMAN),
    ("it-IT", ITALIAN),
    ("pt-BR", PORTUGUESE),
    ("ru-RU", RUSSIAN),
    ("zh-CN", CHINESE_SIMPLIFIED),
    ("zh-TW", CHINESE_TRADITIONAL),
    ("ja-JP", JAPANESE),
    ("ko-KR", KOREAN),
    ("ar-SA", ARABIC),
    ("hi-IN", HINDI),
];
