//! The shipped keyword/response table. Declaration order is match priority.

use chat_core::QuickReply;

use crate::knowledge::TopicEntry;
use crate::topic::Topic;

pub const DEFAULT_RESPONSE: &str = "I'm here to help! I can answer questions about:\n\n• Our services\n• Programming coaching\n• Assignment help\n• Pricing\n• Contact information\n• And more!\n\nWhat would you like to know? Or chat with us directly on WhatsApp!";

const BUILTIN: &[TopicEntry] = &[
    TopicEntry {
        topic: Topic::Greetings,
        triggers: &["hello", "hi", "hey", "good morning", "good afternoon", "good evening"],
        response: "Hello! 👋 Welcome to Brelinx. I'm here to help you with any questions about our IT services. What would you like to know?",
    },
    TopicEntry {
        topic: Topic::Services,
        triggers: &["service", "services", "what do you do", "what can you do", "offerings"],
        response: "We offer a comprehensive range of IT services:\n\n🖥️ Software Development\n📱 Mobile Applications\n👨‍🏫 Programming Coaching\n📚 Assignment Help\n☁️ Cloud Solutions\n🔒 Cybersecurity\n💾 Data Management\n🛠️ IT Support 24/7\n\nWhich service interests you?",
    },
    TopicEntry {
        topic: Topic::Software,
        triggers: &["software", "development", "application", "app"],
        response: "Our Software Development services include:\n\n✨ Custom software solutions\n✨ Web applications\n✨ Enterprise systems\n✨ API development\n✨ System integration\n\nWe design solutions tailored to streamline your business operations and drive growth. Would you like to discuss your project?",
    },
    TopicEntry {
        topic: Topic::Mobile,
        triggers: &["mobile", "android", "ios", "app"],
        response: "We build exceptional Mobile Applications:\n\n📱 Native iOS & Android apps\n📱 Cross-platform solutions\n📱 User-friendly interfaces\n📱 Performance optimized\n\nWe create apps that deliver outstanding user experiences. Interested in building an app?",
    },
    TopicEntry {
        topic: Topic::Coaching,
        triggers: &["coaching", "learn", "teach", "programming", "code", "training"],
        response: "Our Programming Coaching services:\n\n👨‍💻 One-on-one online sessions\n👨‍💻 Personalized learning pace\n👨‍💻 Languages: Python, JavaScript, Java, React, SQL, HTML/CSS\n👨‍💻 Beginner to advanced levels\n👨‍💻 Real-world projects\n👨‍💻 Flexible scheduling\n\nReady to start your coding journey?",
    },
    TopicEntry {
        topic: Topic::Assignment,
        triggers: &["assignment", "homework", "help", "project", "study"],
        response: "We provide Assignment Help for:\n\n📚 Understanding complex concepts\n📚 Code debugging & optimization\n📚 Project completion support\n📚 Exam preparation\n📚 Portfolio projects\n\nWe help you learn and complete your work with confidence. Need help with an assignment?",
    },
    TopicEntry {
        topic: Topic::Cloud,
        triggers: &["cloud", "aws", "azure", "hosting"],
        response: "Our Cloud Solutions include:\n\n☁️ Cloud infrastructure setup\n☁️ Migration services\n☁️ AWS, Azure, Google Cloud\n☁️ Scalable architecture\n☁️ Cost optimization\n\nTransform your business with modern cloud technology!",
    },
    TopicEntry {
        topic: Topic::Security,
        triggers: &["security", "cybersecurity", "protect", "secure"],
        response: "Cybersecurity Services:\n\n🔒 Security audits\n🔒 Threat monitoring\n🔒 Data protection\n🔒 Compliance support\n🔒 Incident response\n\nProtect your business with comprehensive security solutions!",
    },
    TopicEntry {
        topic: Topic::Contact,
        triggers: &["contact", "phone", "email", "reach", "call", "whatsapp"],
        response: "Get in touch with us:\n\n📞 Phone: +27 63 572 2080\n💬 WhatsApp: +27 78 500 2274\n📍 Location: The Glen Road, Johannesburg, GP 2090\n\nYou can also fill out our contact form on the website. How would you prefer to reach us?",
    },
    TopicEntry {
        topic: Topic::Pricing,
        triggers: &["price", "cost", "how much", "pricing", "rates", "fee"],
        response: "Our pricing varies based on:\n\n💰 Project scope and complexity\n💰 Service type\n💰 Timeline\n💰 Support requirements\n\nFor coaching: We offer flexible hourly rates.\n\nContact us for a personalized quote! Would you like to discuss your specific needs?",
    },
    TopicEntry {
        topic: Topic::Location,
        triggers: &["where", "location", "address", "office"],
        response: "We're located at:\n\n📍 The Glen Road\nJohannesburg, GP 2090\nSouth Africa 🇿🇦\n\nWe serve clients globally with online services. Visit our Contact section for the map!",
    },
    TopicEntry {
        topic: Topic::About,
        triggers: &["about", "who are you", "company", "brelinx"],
        response: "Brelinx is your trusted IT partner! 🚀\n\nWe're passionate about delivering innovative IT services and software solutions that transform businesses.\n\n✅ 100+ Projects Completed\n✅ 50+ Happy Clients\n✅ 24/7 Support Available\n\nOur commitment to excellence and customer satisfaction sets us apart. What would you like to know more about?",
    },
];

/// Shipped entries in priority order.
pub fn builtin_entries() -> Vec<TopicEntry> {
    BUILTIN.to_vec()
}

/// Follow-ups offered under the services and default replies.
pub fn suggested_replies() -> Vec<QuickReply> {
    vec![
        QuickReply::new("Coaching", "Tell me about programming coaching"),
        QuickReply::new("Contact", "How can I contact you?"),
        QuickReply::new("Pricing", "What are your prices?"),
    ]
}
