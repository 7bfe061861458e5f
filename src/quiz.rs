//! Lead-capture quiz: three fixed-choice questions, then a contact step.
//!
//! A linear state machine. The only gating is "current question answered"
//! on the way forward and "name and phone filled" on the final step.

/// One fixed-choice question.
pub struct QuizQuestion {
    pub prompt: &'static str,
    pub options: &'static [&'static str],
    pub field: AnswerField,
}

/// Which answer slot a question writes into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerField {
    PropertyType,
    Budget,
    Bedrooms,
}

pub static QUESTIONS: [QuizQuestion; 3] = [
    QuizQuestion {
        prompt: "Какой тип недвижимости вас интересует?",
        options: &["Дом", "Вилла", "Таунхаус", "Резиденция"],
        field: AnswerField::PropertyType,
    },
    QuizQuestion {
        prompt: "Ваш бюджет?",
        options: &["До 50 млн ₽", "50-80 млн ₽", "80-100 млн ₽", "Более 100 млн ₽"],
        field: AnswerField::Budget,
    },
    QuizQuestion {
        prompt: "Количество спален?",
        options: &["2-3", "4-5", "6+"],
        field: AnswerField::Bedrooms,
    },
];

/// Index of the contact-form step, one past the last question.
pub const CONTACT_STEP: usize = QUESTIONS.len();

/// Everything the visitor has entered so far.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuizAnswers {
    pub property_type: String,
    pub budget: String,
    pub bedrooms: String,
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl QuizAnswers {
    pub fn get(&self, field: AnswerField) -> &str {
        match field {
            AnswerField::PropertyType => &self.property_type,
            AnswerField::Budget => &self.budget,
            AnswerField::Bedrooms => &self.bedrooms,
        }
    }

    pub fn set(&mut self, field: AnswerField, value: String) {
        match field {
            AnswerField::PropertyType => self.property_type = value,
            AnswerField::Budget => self.budget = value,
            AnswerField::Bedrooms => self.bedrooms = value,
        }
    }
}

/// The whole quiz state. One of these lives in a signal; every transition
/// replaces it wholesale inside `update`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuizState {
    pub step: usize,
    pub answers: QuizAnswers,
}

impl QuizState {
    /// The question currently showing, or `None` on the contact step.
    pub fn current_question(&self) -> Option<&'static QuizQuestion> {
        QUESTIONS.get(self.step)
    }

    /// "Далее" is enabled only once the current question has an answer.
    pub fn can_advance(&self) -> bool {
        self.current_question()
            .is_some_and(|q| !self.answers.get(q.field).is_empty())
    }

    pub fn advance(&mut self) {
        if self.can_advance() {
            self.step += 1;
        }
    }

    pub fn retreat(&mut self) {
        self.step = self.step.saturating_sub(1);
    }

    /// Name and phone are the only required contact fields.
    pub fn can_submit(&self) -> bool {
        self.step == CONTACT_STEP
            && !self.answers.name.is_empty()
            && !self.answers.phone.is_empty()
    }

    /// Resets to the first question with cleared answers. Returns whether
    /// the submission was accepted, so the view knows to acknowledge it.
    pub fn submit(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        *self = Self::default();
        true
    }
}
