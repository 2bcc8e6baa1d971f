use std::sync::LazyLock;

use crate::types::SegmentType;

use super::locale::Locale;
use super::strings::LocalizedStrings;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayStyle {
    #[default]
    Long,
    Short,
    Narrow,
}

fn english_field_name(ty: SegmentType, style: DisplayStyle) -> Option<&'static str> {
    let short = matches!(style, DisplayStyle::Short | DisplayStyle::Narrow);
    let name = match ty {
        SegmentType::Era => "era",
        SegmentType::Year => {
            if short {
                "yr."
            } else {
                "year"
            }
        }
        SegmentType::Month => {
            if short {
                "mo."
            } else {
                "month"
            }
        }
        SegmentType::Day => "day",
        SegmentType::DayPeriod => "AM/PM",
        SegmentType::Hour => {
            if short {
                "hr."
            } else {
                "hour"
            }
        }
        SegmentType::Minute => {
            if short {
                "min."
            } else {
                "minute"
            }
        }
        SegmentType::Second => {
            if short {
                "sec."
            } else {
                "second"
            }
        }
        SegmentType::Millisecond => {
            if short {
                "ms"
            } else {
                "millisecond"
            }
        }
        SegmentType::TimeZoneName => {
            if short {
                "zone"
            } else {
                "time zone"
            }
        }
        SegmentType::Literal => return None,
    };
    Some(name)
}

static LONG_NAMES: LazyLock<LocalizedStrings> = LazyLock::new(|| {
    LocalizedStrings::new(&[
        (
            "de",
            &[
                ("era", "Epoche"),
                ("year", "Jahr"),
                ("month", "Monat"),
                ("day", "Tag"),
                ("dayPeriod", "Tageshälfte"),
                ("hour", "Stunde"),
                ("minute", "Minute"),
                ("second", "Sekunde"),
                ("millisecond", "Millisekunde"),
                ("timeZoneName", "Zeitzone"),
            ],
        ),
        (
            "fr",
            &[
                ("era", "ère"),
                ("year", "année"),
                ("month", "mois"),
                ("day", "jour"),
                ("dayPeriod", "cadran"),
                ("hour", "heure"),
                ("minute", "minute"),
                ("second", "seconde"),
                ("millisecond", "milliseconde"),
                ("timeZoneName", "fuseau horaire"),
            ],
        ),
        (
            "es",
            &[
                ("era", "era"),
                ("year", "año"),
                ("month", "mes"),
                ("day", "día"),
                ("dayPeriod", "a. m./p. m."),
                ("hour", "hora"),
                ("minute", "minuto"),
                ("second", "segundo"),
                ("millisecond", "milisegundo"),
                ("timeZoneName", "zona horaria"),
            ],
        ),
        (
            "it",
            &[
                ("era", "era"),
                ("year", "anno"),
                ("month", "mese"),
                ("day", "giorno"),
                ("dayPeriod", "AM/PM"),
                ("hour", "ora"),
                ("minute", "minuto"),
                ("second", "secondo"),
                ("millisecond", "millisecondo"),
                ("timeZoneName", "fuso orario"),
            ],
        ),
        (
            "pt",
            &[
                ("era", "era"),
                ("year", "ano"),
                ("month", "mês"),
                ("day", "dia"),
                ("dayPeriod", "AM/PM"),
                ("hour", "hora"),
                ("minute", "minuto"),
                ("second", "segundo"),
                ("millisecond", "milissegundo"),
                ("timeZoneName", "fuso horário"),
            ],
        ),
        (
            "nl",
            &[
                ("era", "tijdperk"),
                ("year", "jaar"),
                ("month", "maand"),
                ("day", "dag"),
                ("dayPeriod", "a.m./p.m."),
                ("hour", "uur"),
                ("minute", "minuut"),
                ("second", "seconde"),
                ("millisecond", "milliseconde"),
                ("timeZoneName", "tijdzone"),
            ],
        ),
        (
            "ru",
            &[
                ("era", "эра"),
                ("year", "год"),
                ("month", "месяц"),
                ("day", "день"),
                ("dayPeriod", "AM/PM"),
                ("hour", "час"),
                ("minute", "минута"),
                ("second", "секунда"),
                ("millisecond", "миллисекунда"),
                ("timeZoneName", "часовой пояс"),
            ],
        ),
        (
            "pl",
            &[
                ("era", "era"),
                ("year", "rok"),
                ("month", "miesiąc"),
                ("day", "dzień"),
                ("dayPeriod", "rano / po południu / wieczorem"),
                ("hour", "godzina"),
                ("minute", "minuta"),
                ("second", "sekunda"),
                ("millisecond", "milisekunda"),
                ("timeZoneName", "strefa czasowa"),
            ],
        ),
        (
            "sv",
            &[
                ("era", "era"),
                ("year", "år"),
                ("month", "månad"),
                ("day", "dag"),
                ("dayPeriod", "fm/em"),
                ("hour", "timme"),
                ("minute", "minut"),
                ("second", "sekund"),
                ("millisecond", "millisekund"),
                ("timeZoneName", "tidszon"),
            ],
        ),
        (
            "ja",
            &[
                ("era", "時代"),
                ("year", "年"),
                ("month", "月"),
                ("day", "日"),
                ("dayPeriod", "午前/午後"),
                ("hour", "時"),
                ("minute", "分"),
                ("second", "秒"),
                ("millisecond", "ミリ秒"),
                ("timeZoneName", "タイムゾーン"),
            ],
        ),
        (
            "zh",
            &[
                ("era", "纪元"),
                ("year", "年"),
                ("month", "月"),
                ("day", "日"),
                ("dayPeriod", "上午/下午"),
                ("hour", "小时"),
                ("minute", "分钟"),
                ("second", "秒"),
                ("millisecond", "毫秒"),
                ("timeZoneName", "时区"),
            ],
        ),
        (
            "ko",
            &[
                ("era", "연호"),
                ("year", "년"),
                ("month", "월"),
                ("day", "일"),
                ("dayPeriod", "오전/오후"),
                ("hour", "시"),
                ("minute", "분"),
                ("second", "초"),
                ("millisecond", "밀리초"),
                ("timeZoneName", "시간대"),
            ],
        ),
        (
            "ar",
            &[
                ("era", "العصر"),
                ("year", "السنة"),
                ("month", "الشهر"),
                ("day", "يوم"),
                ("dayPeriod", "ص/م"),
                ("hour", "الساعات"),
                ("minute", "الدقائق"),
                ("second", "الثواني"),
                ("millisecond", "ملي ثانية"),
                ("timeZoneName", "التوقيت"),
            ],
        ),
        (
            "he",
            &[
                ("era", "תקופה"),
                ("year", "שנה"),
                ("month", "חודש"),
                ("day", "יום"),
                ("dayPeriod", "לפנה״צ/אחה״צ"),
                ("hour", "שעה"),
                ("minute", "דקה"),
                ("second", "שנייה"),
                ("millisecond", "אלפית שנייה"),
                ("timeZoneName", "אזור זמן"),
            ],
        ),
    ])
});

/// Human-readable name of a field, used as an accessible label for its
/// segment. Literals have no name.
///
/// Short and narrow names are English only; long names fall back to English
/// for locales without a table.
pub fn field_display_name(ty: SegmentType, locale: &Locale, style: DisplayStyle) -> Option<String> {
    let english = english_field_name(ty, style)?;
    if style != DisplayStyle::Long {
        return Some(english.to_string());
    }
    let name = LONG_NAMES.get(ty.as_str(), locale).unwrap_or(english);
    Some(name.to_string())
}
