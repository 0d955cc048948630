//! Phrase tables shipped with the app.

use crate::model::language::Language;

pub const EXAMPLE_PHRASES: [&str; 10] = [
    "Hello, how are you?",
    "Where is the train station?",
    "I am hungry.",
    "How much does this cost?",
    "Where is the bathroom?",
    "I need water.",
    "Thank you very much.",
    "Can you help me?",
    "What time is it?",
    "I love this place.",
];

const EN: &[(&str, &str)] = &[
    ("hello", "Hello"),
    ("hi", "Hi"),
    ("thank you", "Thank you"),
    ("thanks", "Thanks"),
    ("how are you", "How are you?"),
    ("good morning", "Good morning"),
    ("good evening", "Good evening"),
    ("good night", "Good night"),
    ("see you later", "See you later"),
    ("nice to meet you", "Nice to meet you"),
    ("water", "Water"),
    ("food", "Food"),
    ("help", "Help"),
    ("yes", "Yes"),
    ("no", "No"),
    ("please", "Please"),
    ("sorry", "Sorry"),
    ("excuse", "Excuse me"),
    ("bathroom", "Bathroom"),
    ("station", "Station"),
    ("hungry", "Hungry"),
    ("tired", "Tired"),
    ("happy", "Happy"),
    ("sad", "Sad"),
    ("love", "Love"),
    ("time", "Time"),
    ("cost", "Cost"),
    ("price", "Price"),
    ("where", "Where"),
    ("what", "What"),
    ("when", "When"),
    ("how", "How"),
    ("why", "Why"),
];

const TA: &[(&str, &str)] = &[
    ("hello", "வணக்கம்"),
    ("hi", "வணக்கம்"),
    ("thank you", "நன்றி"),
    ("thanks", "நன்றி"),
    ("how are you", "நீங்கள் எப்படி இருக்கிறீர்கள்?"),
    ("good morning", "காலை வணக்கம்"),
    ("where is the train station", "ரயில் நிலையம் எங்கே இருக்கிறது?"),
    ("i am hungry", "எனக்கு பசிக்கிறது."),
    ("how much is this", "இது எவ்வளவு?"),
    ("where is the bathroom", "கழிவறை எங்கே?"),
    ("i need water", "எனக்கு தண்ணீர் வேண்டும்."),
    ("see you later", "பிறகு பார்க்கலாம்."),
];

const HI: &[(&str, &str)] = &[
    ("hello", "नमस्ते"),
    ("hi", "नमस्ते"),
    ("thank you", "धन्यवाद"),
    ("thanks", "धन्यवाद"),
    ("how are you", "आप कैसे हैं?"),
    ("good morning", "शुभ प्रभात"),
    ("where is the train station", "ट्रेन स्टेशन कहाँ है?"),
    ("i am hungry", "मुझे भूख लगी है।"),
    ("how much is this", "यह कितने का है?"),
    ("where is the bathroom", "शौचालय कहाँ है?"),
    ("i need water", "मुझे पानी चाहिए।"),
    ("see you later", "फिर मिलेंगे."),
];

const ML: &[(&str, &str)] = &[
    ("hello", "നമസ്കാരം"),
    ("hi", "നമസ്കാരം"),
    ("thank you", "നന്ദി"),
    ("thanks", "നന്ദി"),
    ("how are you", "സുഖമാണോ?"),
    ("good morning", "സുപ്രഭാതം"),
    ("where is the train station", "റെയിൽവേ സ്റ്റേഷൻ എവിടെയാണ്?"),
    ("i am hungry", "എനിക്ക് വിശക്കുന്നു."),
    ("how much is this", "ഇതിന് എത്ര രൂപയാണ്?"),
    ("where is the bathroom", "ടോയ്‌ലെറ്റ് എവിടെയാണ്?"),
    ("i need water", "എനിക്ക് വെള്ളം വേണം."),
    ("see you later", "പിന്നീട് കാണാം."),
];

pub fn table(language: Language) -> &'static [(&'static str, &'static str)] {
    match language {
        Language::En => EN,
        Language::Ta => TA,
        Language::Hi => HI,
        Language::Ml => ML,
    }
}
