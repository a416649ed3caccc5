//! Built-in locale tables.
//!
//! Direction lists follow the reference order of [`DirectionKind::directions`]
//! (cardinal: N, NE, E, SE, S, SW, W, NW; relative: front, back, left, right;
//! spatial: up, down, inside, outside). Unit lists follow [`LengthUnit::ALL`].
//!
//! [`DirectionKind::directions`]: crate::locale::lexicon::DirectionKind::directions
//! [`LengthUnit::ALL`]: crate::locale::lexicon::LengthUnit::ALL

use crate::config::DEFAULT_LENGTH_TOLERANCE;
use crate::locale::lexicon::{
    DateCounters, LengthUnit, Lexicon, OrdinalStyle, UnitNames, UnitSystem,
};
use crate::locale::numbers::NumberSpeller;
use crate::locale::registry::{
    DateFormat, DateOrder, LocaleConfig, NumberFormat, ScriptCleanup, TtsConfig, UnitPreference,
};

use LengthUnit::{Centimeter, Foot, Inch, Kilometer, Meter, Mile, Millimeter, Yard};

const fn unit(
    unit: LengthUnit,
    name: &'static str,
    singular: &'static str,
    alternates: &'static [&'static str],
    abbreviations: &'static [&'static str],
) -> UnitNames {
    UnitNames {
        unit,
        name,
        singular,
        alternates,
        abbreviations,
    }
}

const METRIC_EVERYDAY: &[LengthUnit] = &[Centimeter, Meter, Kilometer];
const METRIC_ALL: &[LengthUnit] = &[Millimeter, Centimeter, Meter, Kilometer];
const IMPERIAL_ALL: &[LengthUnit] = &[Inch, Foot, Yard, Mile];
const BRITISH_MIXED: &[LengthUnit] = &[Centimeter, Meter, Kilometer, Foot, Mile];

const fn tts(pause_after_numbers: bool, digit_grouping: bool, use_ordinals: bool) -> TtsConfig {
    TtsConfig {
        pause_after_numbers,
        digit_grouping,
        use_ordinals,
        pause_marker: ", ",
        rate: 1.0,
        pitch: 1.0,
        volume: 1.0,
    }
}

// ==================== English ====================

const EN_MONTH_VARIANTS: &[&[&str]] = &[
    &["jan"],
    &["feb"],
    &["mar"],
    &["apr"],
    &[],
    &["jun"],
    &["jul"],
    &["aug"],
    &["sep", "sept"],
    &["oct"],
    &["nov"],
    &["dec"],
];

const EN_WEEKDAY_VARIANTS: &[&[&str]] = &[
    &["mon"],
    &["tue", "tues"],
    &["wed"],
    &["thu", "thur", "thurs"],
    &["fri"],
    &["sat"],
    &["sun"],
];

const EN_US_UNITS: &[UnitNames] = &[
    unit(Millimeter, "millimeters", "millimeter", &["millimetres", "millimetre"], &[]),
    unit(Centimeter, "centimeters", "centimeter", &["centimetres", "centimetre"], &[]),
    unit(Meter, "meters", "meter", &["metres", "metre"], &[]),
    unit(Kilometer, "kilometers", "kilometer", &["kilometres", "kilometre"], &["kms"]),
    unit(Inch, "inches", "inch", &[], &[]),
    unit(Foot, "feet", "foot", &[], &[]),
    unit(Yard, "yards", "yard", &[], &["yds"]),
    unit(Mile, "miles", "mile", &[], &[]),
];

const EN_GB_UNITS: &[UnitNames] = &[
    unit(Millimeter, "millimetres", "millimetre", &["millimeters", "millimeter"], &[]),
    unit(Centimeter, "centimetres", "centimetre", &["centimeters", "centimeter"], &[]),
    unit(Meter, "metres", "metre", &["meters", "meter"], &[]),
    unit(Kilometer, "kilometres", "kilometre", &["kilometers", "kilometer"], &["kms"]),
    unit(Inch, "inches", "inch", &[], &[]),
    unit(Foot, "feet", "foot", &[], &[]),
    unit(Yard, "yards", "yard", &[], &["yds"]),
    unit(Mile, "miles", "mile", &[], &[]),
];

const ENGLISH_LEXICON: Lexicon = Lexicon {
    months: [
        "January", "February", "March", "April", "May", "June", "July", "August", "September",
        "October", "November", "December",
    ],
    month_variants: EN_MONTH_VARIANTS,
    weekdays: [
        "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
    ],
    weekday_variants: EN_WEEKDAY_VARIANTS,
    cardinal: &[
        "north", "northeast", "east", "southeast", "south", "southwest", "west", "northwest",
    ],
    relative: &["front", "back", "left", "right"],
    spatial: &["up", "down", "inside", "outside"],
    units: EN_US_UNITS,
    number_words: Some(NumberSpeller::English),
    decimal_word: "point",
    joiner: " ",
    ordinal: OrdinalStyle::English,
    date_counters: None,
};

// ==================== Spanish ====================

const SPANISH_LEXICON: Lexicon = Lexicon {
    months: [
        "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto", "septiembre",
        "octubre", "noviembre", "diciembre",
    ],
    month_variants: &[
        &["ene"],
        &["feb"],
        &["mar"],
        &["abr"],
        &["may"],
        &["jun"],
        &["jul"],
        &["ago"],
        &["sep", "sept", "setiembre"],
        &["oct"],
        &["nov"],
        &["dic"],
    ],
    weekdays: [
        "lunes", "martes", "miércoles", "jueves", "viernes", "sábado", "domingo",
    ],
    weekday_variants: &[
        &["lun"],
        &["mar"],
        &["mié", "miercoles"],
        &["jue"],
        &["vie"],
        &["sáb", "sabado"],
        &["dom"],
    ],
    cardinal: &[
        "norte", "noreste", "este", "sureste", "sur", "suroeste", "oeste", "noroeste",
    ],
    relative: &["delante", "detrás", "izquierda", "derecha"],
    spatial: &["arriba", "abajo", "dentro", "fuera"],
    units: &[
        unit(Millimeter, "milímetros", "milímetro", &["milimetros"], &[]),
        unit(Centimeter, "centímetros", "centímetro", &["centimetros"], &[]),
        unit(Meter, "metros", "metro", &[], &[]),
        unit(Kilometer, "kilómetros", "kilómetro", &["kilometros"], &[]),
        unit(Inch, "pulgadas", "pulgada", &[], &["pulg"]),
        unit(Foot, "pies", "pie", &[], &[]),
        unit(Yard, "yardas", "yarda", &[], &[]),
        unit(Mile, "millas", "milla", &[], &[]),
    ],
    number_words: Some(NumberSpeller::Spanish),
    decimal_word: "coma",
    joiner: " ",
    ordinal: OrdinalStyle::MasculineIndicator,
    date_counters: None,
};

// ==================== French ====================

const FRENCH_LEXICON: Lexicon = Lexicon {
    months: [
        "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
        "octobre", "novembre", "décembre",
    ],
    month_variants: &[
        &["janv"],
        &["févr", "fevrier"],
        &[],
        &["avr"],
        &[],
        &[],
        &["juil"],
        &["aout"],
        &["sept"],
        &["oct"],
        &["nov"],
        &["déc", "decembre"],
    ],
    weekdays: [
        "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi", "dimanche",
    ],
    weekday_variants: &[
        &["lun"],
        &["mar"],
        &["mer"],
        &["jeu"],
        &["ven"],
        &["sam"],
        &["dim"],
    ],
    cardinal: &[
        "nord", "nord-est", "est", "sud-est", "sud", "sud-ouest", "ouest", "nord-ouest",
    ],
    relative: &["devant", "derrière", "gauche", "droite"],
    spatial: &["haut", "bas", "dedans", "dehors"],
    units: &[
        unit(Millimeter, "millimètres", "millimètre", &["millimetres"], &[]),
        unit(Centimeter, "centimètres", "centimètre", &["centimetres"], &[]),
        unit(Meter, "mètres", "mètre", &["metres"], &[]),
        unit(Kilometer, "kilomètres", "kilomètre", &["kilometres"], &[]),
        unit(Inch, "pouces", "pouce", &[], &[]),
        unit(Foot, "pieds", "pied", &[], &[]),
        unit(Yard, "yards", "yard", &[], &[]),
        unit(Mile, "miles", "mile", &[], &[]),
    ],
    number_words: Some(NumberSpeller::French),
    decimal_word: "virgule",
    joiner: " ",
    ordinal: OrdinalStyle::French,
    date_counters: None,
};

// ==================== German ====================

const GERMAN_LEXICON: Lexicon = Lexicon {
    months: [
        "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September",
        "Oktober", "November", "Dezember",
    ],
    month_variants: &[
        &["jan", "jänner"],
        &["feb"],
        &["mär", "maerz"],
        &["apr"],
        &[],
        &["jun"],
        &["jul"],
        &["aug"],
        &["sep", "sept"],
        &["okt"],
        &["nov"],
        &["dez"],
    ],
    weekdays: [
        "Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag", "Sonntag",
    ],
    weekday_variants: &[
        &["mo"],
        &["di"],
        &["mi"],
        &["do"],
        &["fr"],
        &["sa", "sonnabend"],
        &["so"],
    ],
    cardinal: &[
        "Norden",
        "Nordosten",
        "Osten",
        "Südosten",
        "Süden",
        "Südwesten",
        "Westen",
        "Nordwesten",
    ],
    relative: &["vorne", "hinten", "links", "rechts"],
    spatial: &["oben", "unten", "innen", "außen"],
    units: &[
        unit(Millimeter, "Millimeter", "Millimeter", &[], &[]),
        unit(Centimeter, "Zentimeter", "Zentimeter", &[], &[]),
        unit(Meter, "Meter", "Meter", &[], &[]),
        unit(Kilometer, "Kilometer", "Kilometer", &[], &[]),
        unit(Inch, "Zoll", "Zoll", &[], &[]),
        unit(Foot, "Fuß", "Fuß", &["Fuss"], &[]),
        unit(Yard, "Yards", "Yard", &[], &[]),
        unit(Mile, "Meilen", "Meile", &[], &[]),
    ],
    number_words: Some(NumberSpeller::German),
    decimal_word: "Komma",
    joiner: " ",
    ordinal: OrdinalStyle::Period,
    date_counters: None,
};

// ==================== Italian ====================

const ITALIAN_LEXICON: Lexicon = Lexicon {
    months: [
        "gennaio", "febbraio", "marzo", "aprile", "maggio", "giugno", "luglio", "agosto",
        "settembre", "ottobre", "novembre", "dicembre",
    ],
    month_variants: &[
        &["gen"],
        &["feb"],
        &["mar"],
        &["apr"],
        &["mag"],
        &["giu"],
        &["lug"],
        &["ago"],
        &["set"],
        &["ott"],
        &["nov"],
        &["dic"],
    ],
    weekdays: [
        "lunedì", "martedì", "mercoledì", "giovedì", "venerdì", "sabato", "domenica",
    ],
    weekday_variants: &[
        &["lun", "lunedi"],
        &["mar", "martedi"],
        &["mer", "mercoledi"],
        &["gio", "giovedi"],
        &["ven", "venerdi"],
        &["sab"],
        &["dom"],
    ],
    cardinal: &[
        "nord", "nord-est", "est", "sud-est", "sud", "sud-ovest", "ovest", "nord-ovest",
    ],
    relative: &["davanti", "dietro", "sinistra", "destra"],
    spatial: &["su", "giù", "dentro", "fuori"],
    units: &[
        unit(Millimeter, "millimetri", "millimetro", &[], &[]),
        unit(Centimeter, "centimetri", "centimetro", &[], &[]),
        unit(Meter, "metri", "metro", &[], &[]),
        unit(Kilometer, "chilometri", "chilometro", &[], &[]),
        unit(Inch, "pollici", "pollice", &[], &[]),
        unit(Foot, "piedi", "piede", &[], &[]),
        unit(Yard, "iarde", "iarda", &[], &[]),
        unit(Mile, "miglia", "miglio", &[], &[]),
    ],
    number_words: Some(NumberSpeller::Italian),
    decimal_word: "virgola",
    joiner: " ",
    ordinal: OrdinalStyle::MasculineIndicator,
    date_counters: None,
};

// ==================== Portuguese ====================

const PORTUGUESE_LEXICON: Lexicon = Lexicon {
    months: [
        "janeiro", "fevereiro", "março", "abril", "maio", "junho", "julho", "agosto", "setembro",
        "outubro", "novembro", "dezembro",
    ],
    month_variants: &[
        &["jan"],
        &["fev"],
        &["mar", "marco"],
        &["abr"],
        &["mai"],
        &["jun"],
        &["jul"],
        &["ago"],
        &["set"],
        &["out"],
        &["nov"],
        &["dez"],
    ],
    weekdays: [
        "segunda-feira",
        "terça-feira",
        "quarta-feira",
        "quinta-feira",
        "sexta-feira",
        "sábado",
        "domingo",
    ],
    weekday_variants: &[
        &["segunda", "seg"],
        &["terça", "terca", "ter"],
        &["quarta", "qua"],
        &["quinta", "qui"],
        &["sexta", "sex"],
        &["sáb", "sabado"],
        &["dom"],
    ],
    cardinal: &[
        "norte", "nordeste", "leste", "sudeste", "sul", "sudoeste", "oeste", "noroeste",
    ],
    relative: &["frente", "trás", "esquerda", "direita"],
    spatial: &["cima", "baixo", "dentro", "fora"],
    units: &[
        unit(Millimeter, "milímetros", "milímetro", &["milimetros"], &[]),
        unit(Centimeter, "centímetros", "centímetro", &["centimetros"], &[]),
        unit(Meter, "metros", "metro", &[], &[]),
        unit(Kilometer, "quilômetros", "quilômetro", &["quilometros"], &[]),
        unit(Inch, "polegadas", "polegada", &[], &[]),
        unit(Foot, "pés", "pé", &[], &[]),
        unit(Yard, "jardas", "jarda", &[], &[]),
        unit(Mile, "milhas", "milha", &[], &[]),
    ],
    number_words: Some(NumberSpeller::Portuguese),
    decimal_word: "vírgula",
    joiner: " ",
    ordinal: OrdinalStyle::MasculineIndicator,
    date_counters: None,
};

// ==================== Russian ====================

const RUSSIAN_LEXICON: Lexicon = Lexicon {
    months: [
        "январь", "февраль", "март", "апрель", "май", "июнь", "июль", "август", "сентябрь",
        "октябрь", "ноябрь", "декабрь",
    ],
    // Genitive forms, as used in spoken dates
    month_variants: &[
        &["января", "янв"],
        &["февраля", "фев"],
        &["марта", "мар"],
        &["апреля", "апр"],
        &["мая"],
        &["июня", "июн"],
        &["июля", "июл"],
        &["августа", "авг"],
        &["сентября", "сен"],
        &["октября", "окт"],
        &["ноября", "ноя"],
        &["декабря", "дек"],
    ],
    weekdays: [
        "понедельник",
        "вторник",
        "среда",
        "четверг",
        "пятница",
        "суббота",
        "воскресенье",
    ],
    weekday_variants: &[
        &["пн"],
        &["вт"],
        &["ср"],
        &["чт"],
        &["пт"],
        &["сб"],
        &["вс"],
    ],
    cardinal: &[
        "север",
        "северо-восток",
        "восток",
        "юго-восток",
        "юг",
        "юго-запад",
        "запад",
        "северо-запад",
    ],
    relative: &["впереди", "сзади", "слева", "справа"],
    spatial: &["вверху", "внизу", "внутри", "снаружи"],
    units: &[
        unit(Millimeter, "миллиметров", "миллиметр", &["миллиметра"], &["мм"]),
        unit(Centimeter, "сантиметров", "сантиметр", &["сантиметра"], &["см"]),
        unit(Meter, "метров", "метр", &["метра"], &["м"]),
        unit(Kilometer, "километров", "километр", &["километра"], &["км"]),
        unit(Inch, "дюймов", "дюйм", &["дюйма"], &[]),
        unit(Foot, "футов", "фут", &["фута"], &[]),
        unit(Yard, "ярдов", "ярд", &["ярда"], &[]),
        unit(Mile, "миль", "миля", &["мили"], &[]),
    ],
    number_words: None,
    decimal_word: "запятая",
    joiner: " ",
    ordinal: OrdinalStyle::None,
    date_counters: None,
};

// ==================== Chinese ====================

const HANZI_MONTHS: [&str; 12] = [
    "一月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月", "十一月",
    "十二月",
];

const CHINESE_SIMPLIFIED_LEXICON: Lexicon = Lexicon {
    months: HANZI_MONTHS,
    month_variants: &[],
    weekdays: [
        "星期一", "星期二", "星期三", "星期四", "星期五", "星期六", "星期日",
    ],
    weekday_variants: &[
        &["周一", "礼拜一"],
        &["周二", "礼拜二"],
        &["周三", "礼拜三"],
        &["周四", "礼拜四"],
        &["周五", "礼拜五"],
        &["周六", "礼拜六"],
        &["周日", "星期天", "礼拜天", "周天"],
    ],
    cardinal: &["北", "东北", "东", "东南", "南", "西南", "西", "西北"],
    relative: &["前", "后", "左", "右"],
    spatial: &["上", "下", "里", "外"],
    units: &[
        unit(Millimeter, "毫米", "毫米", &[], &[]),
        unit(Centimeter, "厘米", "厘米", &["公分"], &[]),
        unit(Meter, "米", "米", &["公尺"], &[]),
        unit(Kilometer, "公里", "公里", &["千米"], &[]),
        unit(Inch, "英寸", "英寸", &["吋"], &[]),
        unit(Foot, "英尺", "英尺", &["呎"], &[]),
        unit(Yard, "码", "码", &[], &[]),
        unit(Mile, "英里", "英里", &[], &[]),
    ],
    number_words: Some(NumberSpeller::Hanzi),
    decimal_word: "点",
    joiner: "",
    ordinal: OrdinalStyle::None,
    date_counters: Some(DateCounters {
        year: "年",
        month: "月",
        day: "日",
        day_alternates: &["号"],
        spaced: false,
    }),
};

const CHINESE_TRADITIONAL_LEXICON: Lexicon = Lexicon {
    months: HANZI_MONTHS,
    month_variants: &[],
    weekdays: [
        "星期一", "星期二", "星期三", "星期四", "星期五", "星期六", "星期日",
    ],
    weekday_variants: &[
        &["週一", "禮拜一"],
        &["週二", "禮拜二"],
        &["週三", "禮拜三"],
        &["週四", "禮拜四"],
        &["週五", "禮拜五"],
        &["週六", "禮拜六"],
        &["週日", "星期天", "禮拜天"],
    ],
    cardinal: &["北", "東北", "東", "東南", "南", "西南", "西", "西北"],
    relative: &["前", "後", "左", "右"],
    spatial: &["上", "下", "裡", "外"],
    units: &[
        unit(Millimeter, "毫米", "毫米", &["公釐"], &[]),
        unit(Centimeter, "公分", "公分", &["釐米", "厘米"], &[]),
        unit(Meter, "公尺", "公尺", &["米"], &[]),
        unit(Kilometer, "公里", "公里", &["千米"], &[]),
        unit(Inch, "英吋", "英吋", &["吋"], &[]),
        unit(Foot, "英尺", "英尺", &["呎"], &[]),
        unit(Yard, "碼", "碼", &[], &[]),
        unit(Mile, "英里", "英里", &["哩"], &[]),
    ],
    number_words: Some(NumberSpeller::Hanzi),
    decimal_word: "點",
    joiner: "",
    ordinal: OrdinalStyle::None,
    date_counters: Some(DateCounters {
        year: "年",
        month: "月",
        day: "日",
        day_alternates: &["號"],
        spaced: false,
    }),
};

// ==================== Japanese ====================

const JAPANESE_LEXICON: Lexicon = Lexicon {
    months: [
        "1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月", "12月",
    ],
    month_variants: &[],
    weekdays: [
        "月曜日", "火曜日", "水曜日", "木曜日", "金曜日", "土曜日", "日曜日",
    ],
    weekday_variants: &[
        &["月曜", "月"],
        &["火曜", "火"],
        &["水曜", "水"],
        &["木曜", "木"],
        &["金曜", "金"],
        &["土曜", "土"],
        &["日曜", "日"],
    ],
    cardinal: &["北", "北東", "東", "南東", "南", "南西", "西", "北西"],
    relative: &["前", "後ろ", "左", "右"],
    spatial: &["上", "下", "中", "外"],
    units: &[
        unit(Millimeter, "ミリメートル", "ミリメートル", &[], &["ミリ"]),
        unit(Centimeter, "センチメートル", "センチメートル", &[], &["センチ"]),
        unit(Meter, "メートル", "メートル", &[], &[]),
        unit(Kilometer, "キロメートル", "キロメートル", &[], &["キロ"]),
        unit(Inch, "インチ", "インチ", &[], &[]),
        unit(Foot, "フィート", "フィート", &[], &[]),
        unit(Yard, "ヤード", "ヤード", &[], &[]),
        unit(Mile, "マイル", "マイル", &[], &[]),
    ],
    number_words: Some(NumberSpeller::Hanzi),
    decimal_word: "点",
    joiner: "",
    ordinal: OrdinalStyle::None,
    date_counters: Some(DateCounters {
        year: "年",
        month: "月",
        day: "日",
        day_alternates: &[],
        spaced: false,
    }),
};

// ==================== Korean ====================

const KOREAN_LEXICON: Lexicon = Lexicon {
    months: [
        "1월", "2월", "3월", "4월", "5월", "6월", "7월", "8월", "9월", "10월", "11월", "12월",
    ],
    month_variants: &[],
    weekdays: [
        "월요일", "화요일", "수요일", "목요일", "금요일", "토요일", "일요일",
    ],
    weekday_variants: &[&["월"], &["화"], &["수"], &["목"], &["금"], &["토"], &["일"]],
    cardinal: &["북", "북동", "동", "남동", "남", "남서", "서", "북서"],
    relative: &["앞", "뒤", "왼쪽", "오른쪽"],
    spatial: &["위", "아래", "안", "밖"],
    units: &[
        unit(Millimeter, "밀리미터", "밀리미터", &[], &["밀리"]),
        unit(Centimeter, "센티미터", "센티미터", &[], &["센티"]),
        unit(Meter, "미터", "미터", &[], &[]),
        unit(Kilometer, "킬로미터", "킬로미터", &[], &["킬로"]),
        unit(Inch, "인치", "인치", &[], &[]),
        unit(Foot, "피트", "피트", &[], &[]),
        unit(Yard, "야드", "야드", &[], &[]),
        unit(Mile, "마일", "마일", &[], &[]),
    ],
    number_words: Some(NumberSpeller::Korean),
    decimal_word: "점",
    joiner: "",
    ordinal: OrdinalStyle::None,
    date_counters: Some(DateCounters {
        year: "년",
        month: "월",
        day: "일",
        day_alternates: &[],
        spaced: true,
    }),
};

// ==================== Arabic ====================

const ARABIC_LEXICON: Lexicon = Lexicon {
    months: [
        "يناير", "فبراير", "مارس", "أبريل", "مايو", "يونيو", "يوليو", "أغسطس", "سبتمبر", "أكتوبر",
        "نوفمبر", "ديسمبر",
    ],
    // Levantine month names
    month_variants: &[
        &["كانون الثاني"],
        &["شباط"],
        &["آذار"],
        &["نيسان"],
        &["أيار"],
        &["حزيران"],
        &["تموز"],
        &["آب"],
        &["أيلول"],
        &["تشرين الأول"],
        &["تشرين الثاني"],
        &["كانون الأول"],
    ],
    weekdays: [
        "الاثنين", "الثلاثاء", "الأربعاء", "الخميس", "الجمعة", "السبت", "الأحد",
    ],
    weekday_variants: &[
        &["يوم الاثنين"],
        &["يوم الثلاثاء"],
        &["يوم الأربعاء"],
        &["يوم الخميس"],
        &["يوم الجمعة"],
        &["يوم السبت"],
        &["يوم الأحد"],
    ],
    cardinal: &[
        "شمال",
        "شمال شرق",
        "شرق",
        "جنوب شرق",
        "جنوب",
        "جنوب غرب",
        "غرب",
        "شمال غرب",
    ],
    relative: &["أمام", "خلف", "يسار", "يمين"],
    spatial: &["أعلى", "أسفل", "داخل", "خارج"],
    units: &[
        unit(Millimeter, "ملليمتر", "ملليمتر", &["مليمتر"], &["مم"]),
        unit(Centimeter, "سنتيمتر", "سنتيمتر", &["سنتيمترات"], &["سم"]),
        unit(Meter, "متر", "متر", &["أمتار"], &["م"]),
        unit(Kilometer, "كيلومتر", "كيلومتر", &["كيلومترات"], &["كم"]),
        unit(Inch, "بوصة", "بوصة", &["بوصات"], &[]),
        unit(Foot, "قدم", "قدم", &["أقدام"], &[]),
        unit(Yard, "ياردة", "ياردة", &["ياردات"], &[]),
        unit(Mile, "ميل", "ميل", &["أميال"], &[]),
    ],
    number_words: None,
    decimal_word: "فاصلة",
    joiner: " ",
    ordinal: OrdinalStyle::None,
    date_counters: None,
};

// ==================== Hindi ====================

const HINDI_LEXICON: Lexicon = Lexicon {
    months: [
        "जनवरी", "फ़रवरी", "मार्च", "अप्रैल", "मई", "जून", "जुलाई", "अगस्त", "सितंबर", "अक्टूबर",
        "नवंबर", "दिसंबर",
    ],
    month_variants: &[
        &[],
        &["फरवरी"],
        &[],
        &[],
        &[],
        &[],
        &[],
        &[],
        &["सितम्बर"],
        &["अक्तूबर"],
        &["नवम्बर"],
        &["दिसम्बर"],
    ],
    weekdays: [
        "सोमवार", "मंगलवार", "बुधवार", "गुरुवार", "शुक्रवार", "शनिवार", "रविवार",
    ],
    weekday_variants: &[&[], &[], &[], &["बृहस्पतिवार"], &[], &[], &["इतवार"]],
    cardinal: &[
        "उत्तर",
        "उत्तर-पूर्व",
        "पूर्व",
        "दक्षिण-पूर्व",
        "दक्षिण",
        "दक्षिण-पश्चिम",
        "पश्चिम",
        "उत्तर-पश्चिम",
    ],
    relative: &["आगे", "पीछे", "बाएँ", "दाएँ"],
    spatial: &["ऊपर", "नीचे", "अंदर", "बाहर"],
    units: &[
        unit(Millimeter, "मिलीमीटर", "मिलीमीटर", &[], &["मिमी"]),
        unit(Centimeter, "सेंटीमीटर", "सेंटीमीटर", &[], &["सेमी"]),
        unit(Meter, "मीटर", "मीटर", &[], &["मी"]),
        unit(Kilometer, "किलोमीटर", "किलोमीटर", &[], &["किमी"]),
        unit(Inch, "इंच", "इंच", &[], &[]),
        unit(Foot, "फुट", "फुट", &["फ़ुट", "फीट"], &[]),
        unit(Yard, "गज", "गज", &[], &[]),
        unit(Mile, "मील", "मील", &[], &[]),
    ],
    number_words: None,
    decimal_word: "दशमलव",
    joiner: " ",
    ordinal: OrdinalStyle::None,
    date_counters: None,
};

// ==================== Locale Records ====================

/// All supported locales; `en-US` is the reference.
pub fn default_locales() -> Vec<LocaleConfig> {
    let tolerance = DEFAULT_LENGTH_TOLERANCE;

    vec![
        LocaleConfig {
            code: "en-US",
            name: "English (United States)",
            native_name: "English",
            is_reference: true,
            number: NumberFormat {
                decimal_separator: '.',
                thousands_separator: ',',
            },
            date: DateFormat {
                order: DateOrder::Mdy,
                separator: '/',
            },
            units: UnitPreference {
                system: UnitSystem::Imperial,
                preferred: IMPERIAL_ALL,
                tolerance,
            },
            tts: tts(false, false, true),
            script: ScriptCleanup::None,
            lexicon: ENGLISH_LEXICON,
        },
        LocaleConfig {
            code: "en-GB",
            name: "English (United Kingdom)",
            native_name: "English (UK)",
            is_reference: false,
            number: NumberFormat {
                decimal_separator: '.',
                thousands_separator: ',',
            },
            date: DateFormat {
                order: DateOrder::Dmy,
                separator: '/',
            },
            units: UnitPreference {
                system: UnitSystem::Mixed,
                preferred: BRITISH_MIXED,
                tolerance,
            },
            tts: tts(false, false, true),
            script: ScriptCleanup::None,
            lexicon: Lexicon {
                units: EN_GB_UNITS,
                ..ENGLISH_LEXICON
            },
        },
        LocaleConfig {
            code: "es-ES",
            name: "Spanish (Spain)",
            native_name: "Español",
            is_reference: false,
            number: NumberFormat {
                decimal_separator: ',',
                thousands_separator: '.',
            },
            date: DateFormat {
                order: DateOrder::Dmy,
                separator: '/',
            },
            units: UnitPreference {
                system: UnitSystem::Metric,
                preferred: METRIC_EVERYDAY,
                tolerance,
            },
            tts: tts(false, false, false),
            script: ScriptCleanup::None,
            lexicon: SPANISH_LEXICON,
        },
        LocaleConfig {
            code: "fr-FR",
            name: "French (France)",
            native_name: "Français",
            is_reference: false,
            number: NumberFormat {
                decimal_separator: ',',
                thousands_separator: ' ',
            },
            date: DateFormat {
                order: DateOrder::Dmy,
                separator: '/',
            },
            units: UnitPreference {
                system: UnitSystem::Metric,
                preferred: METRIC_ALL,
                tolerance,
            },
            tts: tts(true, false, true),
            script: ScriptCleanup::None,
            lexicon: FRENCH_LEXICON,
        },
        LocaleConfig {
            code: "de-DE",
            name: "German (Germany)",
            native_name: "Deutsch",
            is_reference: false,
            number: NumberFormat {
                decimal_separator: ',',
                thousands_separator: '.',
            },
            date: DateFormat {
                order: DateOrder::Dmy,
                separator: '.',
            },
            units: UnitPreference {
                system: UnitSystem::Metric,
                preferred: METRIC_ALL,
                tolerance,
            },
            tts: tts(true, true, true),
            script: ScriptCleanup::None,
            lexicon: GERMAN_LEXICON,
        },
        LocaleConfig {
            code: "it-IT",
            name: "Italian (Italy)",
            native_name: "Italiano",
            is_reference: false,
            number: NumberFormat {
                decimal_separator: ',',
                thousands_separator: '.',
            },
            date: DateFormat {
                order: DateOrder::Dmy,
                separator: '/',
            },
            units: UnitPreference {
                system: UnitSystem::Metric,
                preferred: METRIC_EVERYDAY,
                tolerance,
            },
            tts: tts(false, false, false),
            script: ScriptCleanup::None,
            lexicon: ITALIAN_LEXICON,
        },
        LocaleConfig {
            code: "pt-BR",
            name: "Portuguese (Brazil)",
            native_name: "Português",
            is_reference: false,
            number: NumberFormat {
                decimal_separator: ',',
                thousands_separator: '.',
            },
            date: DateFormat {
                order: DateOrder::Dmy,
                separator: '/',
            },
            units: UnitPreference {
                system: UnitSystem::Metric,
                preferred: METRIC_EVERYDAY,
                tolerance,
            },
            tts: tts(false, false, false),
            script: ScriptCleanup::None,
            lexicon: PORTUGUESE_LEXICON,
        },
        LocaleConfig {
            code: "ru-RU",
            name: "Russian (Russia)",
            native_name: "Русский",
            is_reference: false,
            number: NumberFormat {
                decimal_separator: ',',
                thousands_separator: ' ',
            },
            date: DateFormat {
                order: DateOrder::Dmy,
                separator: '.',
            },
            units: UnitPreference {
                system: UnitSystem::Metric,
                preferred: METRIC_ALL,
                tolerance,
            },
            tts: TtsConfig {
                rate: 0.9,
                ..tts(true, true, false)
            },
            script: ScriptCleanup::None,
            lexicon: RUSSIAN_LEXICON,
        },
        LocaleConfig {
            code: "zh-CN",
            name: "Chinese (Simplified)",
            native_name: "简体中文",
            is_reference: false,
            number: NumberFormat {
                decimal_separator: '.',
                thousands_separator: ',',
            },
            date: DateFormat {
                order: DateOrder::Ymd,
                separator: '-',
            },
            units: UnitPreference {
                system: UnitSystem::Metric,
                preferred: METRIC_EVERYDAY,
                tolerance,
            },
            tts: TtsConfig {
                pause_marker: "，",
                rate: 0.9,
                ..tts(true, false, false)
            },
            script: ScriptCleanup::Cjk,
            lexicon: CHINESE_SIMPLIFIED_LEXICON,
        },
        LocaleConfig {
            code: "zh-TW",
            name: "Chinese (Traditional)",
            native_name: "繁體中文",
            is_reference: false,
            number: NumberFormat {
                decimal_separator: '.',
                thousands_separator: ',',
            },
            date: DateFormat {
                order: DateOrder::Ymd,
                separator: '/',
            },
            units: UnitPreference {
                system: UnitSystem::Metric,
                preferred: METRIC_EVERYDAY,
                tolerance,
            },
            tts: TtsConfig {
                pause_marker: "，",
                rate: 0.9,
                ..tts(true, false, false)
            },
            script: ScriptCleanup::Cjk,
            lexicon: CHINESE_TRADITIONAL_LEXICON,
        },
        LocaleConfig {
            code: "ja-JP",
            name: "Japanese (Japan)",
            native_name: "日本語",
            is_reference: false,
            number: NumberFormat {
                decimal_separator: '.',
                thousands_separator: ',',
            },
            date: DateFormat {
                order: DateOrder::Ymd,
                separator: '/',
            },
            units: UnitPreference {
                system: UnitSystem::Metric,
                preferred: METRIC_ALL,
                tolerance,
            },
            tts: TtsConfig {
                pause_marker: "、",
                ..tts(true, false, false)
            },
            script: ScriptCleanup::Cjk,
            lexicon: JAPANESE_LEXICON,
        },
        LocaleConfig {
            code: "ko-KR",
            name: "Korean (South Korea)",
            native_name: "한국어",
            is_reference: false,
            number: NumberFormat {
                decimal_separator: '.',
                thousands_separator: ',',
            },
            date: DateFormat {
                order: DateOrder::Ymd,
                separator: '.',
            },
            units: UnitPreference {
                system: UnitSystem::Metric,
                preferred: METRIC_EVERYDAY,
                tolerance,
            },
            tts: tts(true, false, false),
            script: ScriptCleanup::Cjk,
            lexicon: KOREAN_LEXICON,
        },
        LocaleConfig {
            code: "ar-SA",
            name: "Arabic (Saudi Arabia)",
            native_name: "العربية",
            is_reference: false,
            number: NumberFormat {
                decimal_separator: '.',
                thousands_separator: ',',
            },
            date: DateFormat {
                order: DateOrder::Dmy,
                separator: '/',
            },
            units: UnitPreference {
                system: UnitSystem::Metric,
                preferred: METRIC_EVERYDAY,
                tolerance,
            },
            tts: TtsConfig {
                pause_marker: "، ",
                rate: 0.9,
                ..tts(true, true, false)
            },
            script: ScriptCleanup::RightToLeft,
            lexicon: ARABIC_LEXICON,
        },
        LocaleConfig {
            code: "hi-IN",
            name: "Hindi (India)",
            native_name: "हिन्दी",
            is_reference: false,
            number: NumberFormat {
                decimal_separator: '.',
                thousands_separator: ',',
            },
            date: DateFormat {
                order: DateOrder::Dmy,
                separator: '/',
            },
            units: UnitPreference {
                system: UnitSystem::Metric,
                preferred: METRIC_EVERYDAY,
                tolerance,
            },
            tts: tts(true, true, false),
            script: ScriptCleanup::Devanagari,
            lexicon: HINDI_LEXICON,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::lexicon::{Direction, DirectionKind};

    #[test]
    fn test_reference_locale_is_first() {
        let locales = default_locales();
        assert_eq!(locales[0].code, "en-US");
        assert!(locales[0].is_reference);
        assert_eq!(locales.iter().filter(|l| l.is_reference).count(), 1);
    }

    #[test]
    fn test_preferred_units_match_system() {
        for locale in default_locales() {
            for unit in locale.units.preferred {
                match locale.units.system {
                    UnitSystem::Metric | UnitSystem::Imperial => {
                        assert_eq!(unit.system(), locale.units.system, "{}", locale.code)
                    }
                    UnitSystem::Mixed => {}
                }
            }
        }
    }

    #[test]
    fn test_reference_words_line_up_with_directions() {
        let english = &default_locales()[0].lexicon;
        assert_eq!(english.direction_word(Direction::North), Some("north"));
        assert_eq!(english.direction_word(Direction::Southwest), Some("southwest"));
        assert_eq!(english.direction_word(Direction::Back), Some("back"));
        assert_eq!(english.direction_word(Direction::Outside), Some("outside"));
    }

    #[test]
    fn test_french_words_line_up_with_reference() {
        let locales = default_locales();
        let french = &locales.iter().find(|l| l.code == "fr-FR").unwrap().lexicon;
        assert_eq!(french.direction_word(Direction::North), Some("nord"));
        assert_eq!(french.direction_word(Direction::Northwest), Some("nord-ouest"));
        assert_eq!(french.direction_word(Direction::Left), Some("gauche"));
        for kind in DirectionKind::ALL {
            assert_eq!(
                french.direction_words(kind).len(),
                kind.directions().len()
            );
        }
    }

    #[test]
    fn test_units_listed_in_reference_order() {
        for locale in default_locales() {
            let order: Vec<LengthUnit> = locale.lexicon.units.iter().map(|u| u.unit).collect();
            assert_eq!(order, LengthUnit::ALL.to_vec(), "{}", locale.code);
        }
    }

    #[test]
    fn test_cjk_locales_have_counters() {
        for locale in default_locales() {
            let has_counters = locale.lexicon.date_counters.is_some();
            let is_cjk = matches!(locale.script, ScriptCleanup::Cjk);
            assert_eq!(has_counters, is_cjk, "{}", locale.code);
        }
    }
}
