use crate::domain::shared::language::LanguageCode;
use crate::domain::translation::{Phrasebook, PhrasebookRepository};
use std::collections::HashMap;

// Multi-word phrases come before the single words they contain so that
// "Please proceed to" is not pre-empted by "to".
const MALAY_PHRASES: &[(&str, &str)] = &[
    ("Ladies and gentlemen", "Tuan-tuan dan puan-puan"),
    ("Final boarding call", "Panggilan terakhir untuk menaiki kapal terbang"),
    ("for passengers on", "untuk penumpang"),
    ("Please proceed to", "Sila pergi ke"),
    ("International Airport", "Lapangan Terbang Antarabangsa"),
    ("Attention passengers", "Perhatian penumpang"),
    ("connecting flight", "penerbangan sambungan"),
    ("is now boarding", "sedang menaiki kapal terbang"),
    ("departure gate", "pintu berlepas"),
    ("welcome to", "selamat datang ke"),
    ("Kuala Lumpur", "Kuala Lumpur"),
    ("Thank you", "Terima kasih"),
    ("at Gate", "di Pintu"),
    ("Singapore", "Singapura"),
    ("Flight", "Penerbangan"),
    ("to", "ke"),
];

const SIMPLIFIED_CHINESE_PHRASES: &[(&str, &str)] = &[
    ("Ladies and gentlemen", "女士们先生们"),
    ("Final boarding call", "最后登机通知"),
    ("for passengers on", "搭乘"),
    ("Please proceed to", "请前往"),
    ("International Airport", "国际机场"),
    ("Attention passengers", "各位旅客请注意"),
    ("connecting flight", "转机航班"),
    ("is now boarding", "现在开始登机"),
    ("departure gate", "登机口"),
    ("welcome to", "欢迎来到"),
    ("Kuala Lumpur", "吉隆坡"),
    ("Thank you", "谢谢"),
    ("at Gate", "在"),
    ("Singapore", "新加坡"),
    ("Flight", "航班"),
    ("Gate", "号登机口"),
    ("to", "飞往"),
];

const TRADITIONAL_CHINESE_PHRASES: &[(&str, &str)] = &[
    ("Ladies and gentlemen", "女士們先生們"),
    ("Final boarding call", "最後登機通知"),
    ("for passengers on", "搭乘"),
    ("Please proceed to", "請前往"),
    ("International Airport", "國際機場"),
    ("Attention passengers", "各位旅客請注意"),
    ("connecting flight", "轉機航班"),
    ("is now boarding", "現在開始登機"),
    ("departure gate", "登機口"),
    ("welcome to", "歡迎來到"),
    ("Kuala Lumpur", "吉隆坡"),
    ("Thank you", "謝謝"),
    ("at Gate", "在"),
    ("Singapore", "新加坡"),
    ("Flight", "航班"),
    ("Gate", "號登機口"),
    ("to", "飛往"),
];

/// Airport announcement phrase tables compiled once at startup
pub struct HardcodedPhrasebookRepository {
    phrasebooks: HashMap<LanguageCode, Phrasebook>,
}

impl HardcodedPhrasebookRepository {
    pub fn new() -> Result<Self, regex::Error> {
        let tables = [
            (LanguageCode::MalayMalaysia, MALAY_PHRASES),
            (LanguageCode::ChineseSimplified, SIMPLIFIED_CHINESE_PHRASES),
            (LanguageCode::ChineseTraditional, TRADITIONAL_CHINESE_PHRASES),
        ];

        let mut phrasebooks = HashMap::with_capacity(tables.len());
        for (language, phrases) in tables {
            phrasebooks.insert(language, Phrasebook::new(phrases)?);
        }

        Ok(Self { phrasebooks })
    }
}

impl PhrasebookRepository for HardcodedPhrasebookRepository {
    fn phrasebook(&self, language: LanguageCode) -> Option<&Phrasebook> {
        self.phrasebooks.get(&language)
    }
}
