//! Built-in quiz sets.

use crate::education::quiz::{Difficulty, QuizError, QuizQuestion, QuizSet};

pub static QUIZ_SETS: &[QuizSet] = &[PHISHING, PASSWORDS, MALWARE];

/// Look up a quiz set by its id (`phishing`, `passwords`, `malware`).
pub fn find_set(id: &str) -> Result<&'static QuizSet, QuizError> {
    QUIZ_SETS
        .iter()
        .find(|set| set.id.eq_ignore_ascii_case(id))
        .ok_or_else(|| QuizError::UnknownQuiz(id.to_string()))
}

const PHISHING: QuizSet = QuizSet {
    id: "phishing",
    title: "Phishing Attacks",
    description: "Test your knowledge about phishing and social engineering attacks",
    difficulty: Difficulty::Easy,
    questions: &[
        QuizQuestion {
            id: 1,
            prompt: "What is the most common way phishing attacks are delivered?",
            options: &["Text messages", "Email", "Phone calls", "Social media"],
            correct: 1,
            explanation: "Email is the most common delivery method for phishing attacks. Attackers use email because it's easy to send to many people at once and can be made to look legitimate.",
            category: "Phishing",
            difficulty: Difficulty::Easy,
        },
        QuizQuestion {
            id: 2,
            prompt: "Which of these is a red flag that an email might be a phishing attempt?",
            options: &[
                "Professional logo",
                "Urgent language demanding immediate action",
                "Proper grammar",
                "Sender's real name",
            ],
            correct: 1,
            explanation: "Urgent language creating pressure to act quickly is a common phishing tactic. Legitimate organizations rarely demand immediate action through email.",
            category: "Phishing",
            difficulty: Difficulty::Easy,
        },
        QuizQuestion {
            id: 3,
            prompt: "What should you do if you receive a suspicious email asking for personal information?",
            options: &[
                "Reply with the information",
                "Click the link to verify",
                "Delete the email and contact the organization directly",
                "Forward it to friends",
            ],
            correct: 2,
            explanation: "Always delete suspicious emails and contact the organization through official channels. Never provide personal information through email.",
            category: "Phishing",
            difficulty: Difficulty::Easy,
        },
        QuizQuestion {
            id: 4,
            prompt: "What is 'spear phishing'?",
            options: &[
                "Phishing using fake websites",
                "Targeted phishing attacks on specific individuals",
                "Phishing through social media",
                "Phishing using malware",
            ],
            correct: 1,
            explanation: "Spear phishing is a targeted attack where criminals research specific individuals or organizations to create highly convincing, personalized phishing messages.",
            category: "Phishing",
            difficulty: Difficulty::Medium,
        },
        QuizQuestion {
            id: 5,
            prompt: "Which domain would be most suspicious in a phishing email claiming to be from Google?",
            options: &["google.com", "gmail.com", "g00gle.com", "accounts.google.com"],
            correct: 2,
            explanation: "g00gle.com uses zeros instead of 'o's, which is a common technique to create look-alike domains for phishing attacks.",
            category: "Phishing",
            difficulty: Difficulty::Medium,
        },
    ],
};

const PASSWORDS: QuizSet = QuizSet {
    id: "passwords",
    title: "Password Security",
    description: "Learn about creating and managing secure passwords",
    difficulty: Difficulty::Medium,
    questions: &[
        QuizQuestion {
            id: 1,
            prompt: "What makes a password strong?",
            options: &[
                "Using your birthday",
                "Length and complexity",
                "Using the same password everywhere",
                "Using only numbers",
            ],
            correct: 1,
            explanation: "Strong passwords combine length (12+ characters) with complexity (uppercase, lowercase, numbers, symbols) and should be unique for each account.",
            category: "Passwords",
            difficulty: Difficulty::Easy,
        },
        QuizQuestion {
            id: 2,
            prompt: "Which is the best practice for password management?",
            options: &[
                "Write them down on paper",
                "Use the same password for everything",
                "Use a password manager",
                "Save them in your browser",
            ],
            correct: 2,
            explanation: "Password managers securely store unique, complex passwords for all your accounts and only require you to remember one master password.",
            category: "Passwords",
            difficulty: Difficulty::Medium,
        },
        QuizQuestion {
            id: 3,
            prompt: "How often should you change your passwords?",
            options: &["Daily", "Weekly", "Only when there's a security breach", "Every 30 days"],
            correct: 2,
            explanation: "Modern security experts recommend changing passwords only when there's evidence of compromise, not on a regular schedule, as frequent changes often lead to weaker passwords.",
            category: "Passwords",
            difficulty: Difficulty::Medium,
        },
        QuizQuestion {
            id: 4,
            prompt: "What is two-factor authentication (2FA)?",
            options: &[
                "Using two passwords",
                "Using password and additional verification",
                "Having two email accounts",
                "Using biometrics only",
            ],
            correct: 1,
            explanation: "2FA adds an extra layer of security by requiring something you know (password) and something you have (phone, token) or something you are (biometric).",
            category: "Passwords",
            difficulty: Difficulty::Easy,
        },
        QuizQuestion {
            id: 5,
            prompt: "Which 2FA method is considered most secure?",
            options: &["SMS codes", "Email codes", "Authenticator apps", "Security questions"],
            correct: 2,
            explanation: "Authenticator apps are more secure than SMS because they're not vulnerable to SIM swapping attacks and work offline.",
            category: "Passwords",
            difficulty: Difficulty::Medium,
        },
    ],
};

const MALWARE: QuizSet = QuizSet {
    id: "malware",
    title: "Malware & Ransomware",
    description: "Understand different types of malicious software and protection strategies",
    difficulty: Difficulty::Hard,
    questions: &[
        QuizQuestion {
            id: 1,
            prompt: "What is ransomware?",
            options: &[
                "Software that speeds up your computer",
                "Malware that encrypts files for money",
                "A type of antivirus",
                "Free software",
            ],
            correct: 1,
            explanation: "Ransomware encrypts your files and demands payment for the decryption key. It's one of the most damaging types of malware for individuals and businesses.",
            category: "Malware",
            difficulty: Difficulty::Easy,
        },
        QuizQuestion {
            id: 2,
            prompt: "What's the best protection against ransomware?",
            options: &[
                "Paying the ransom quickly",
                "Regular backups kept offline",
                "Using only free software",
                "Avoiding the internet",
            ],
            correct: 1,
            explanation: "Regular, tested backups stored offline or in immutable storage are your best defense. If files are encrypted, you can restore from backups without paying.",
            category: "Malware",
            difficulty: Difficulty::Medium,
        },
        QuizQuestion {
            id: 3,
            prompt: "What is a 'zero-day' attack?",
            options: &[
                "An attack that happens at midnight",
                "An attack using unknown vulnerabilities",
                "An attack that costs zero dollars",
                "An attack lasting zero days",
            ],
            correct: 1,
            explanation: "Zero-day attacks exploit previously unknown vulnerabilities before developers can create and distribute patches, making them particularly dangerous.",
            category: "Malware",
            difficulty: Difficulty::Hard,
        },
        QuizQuestion {
            id: 4,
            prompt: "Which file type is most commonly used to spread malware?",
            options: &["PDF files", "Image files", "Executable files (.exe)", "Text files"],
            correct: 2,
            explanation: "Executable files (.exe) can run code directly on your system, making them the most common vector for malware distribution.",
            category: "Malware",
            difficulty: Difficulty::Medium,
        },
        QuizQuestion {
            id: 5,
            prompt: "What should you do if you suspect your computer is infected with malware?",
            options: &[
                "Keep using it normally",
                "Disconnect from internet and run antivirus scan",
                "Restart the computer",
                "Delete all files",
            ],
            correct: 1,
            explanation: "Immediately disconnect from the internet to prevent data theft or further damage, then run a comprehensive antivirus scan to detect and remove threats.",
            category: "Malware",
            difficulty: Difficulty::Medium,
        },
    ],
};
