use super::super::answers::{AnswerLookup, AnswerSet};
use super::super::domain::{AnswerValue, Question};
use super::config::DontKnowPolicy;
use super::ImprovementOpportunity;
use tracing::warn;

pub(crate) const MAX_OPPORTUNITIES: usize = 3;
pub(crate) const OPPORTUNITY_THRESHOLD: u8 = 1;

#[derive(Debug, Default)]
pub(crate) struct DimensionTally {
    pub sum: u32,
    pub max_possible: u32,
    pub answered: usize,
    pub opportunities: Vec<ImprovementOpportunity>,
}

pub(crate) fn tally_dimension(
    questions: &[&Question],
    answers: &AnswerSet,
    dont_know: DontKnowPolicy,
) -> DimensionTally {
    let mut tally = DimensionTally::default();

    for question in questions {
        let points = match answers.lookup(&question.id) {
            AnswerLookup::Missing => continue,
            AnswerLookup::Unrecognized(raw) => {
                warn!(
                    question_id = %question.id,
                    value = raw,
                    "excluding unrecognized answer value"
                );
                continue;
            }
            AnswerLookup::Recognized(AnswerValue::NotApplicable) => continue,
            AnswerLookup::Recognized(AnswerValue::DontKnow) => match dont_know {
                DontKnowPolicy::ScoreAsZero => 0,
                DontKnowPolicy::Exclude => continue,
            },
            AnswerLookup::Recognized(AnswerValue::Scale(value)) => value,
        };

        tally.sum += u32::from(points);
        tally.max_possible += u32::from(AnswerValue::SCALE_MAX);
        tally.answered += 1;

        if points <= OPPORTUNITY_THRESHOLD && tally.opportunities.len() < MAX_OPPORTUNITIES {
            tally.opportunities.push(ImprovementOpportunity {
                question_id: question.id.clone(),
                text: question.text.clone(),
            });
        }
    }

    tally
}

pub(crate) fn percentage(sum: u32, max_possible: u32) -> u8 {
    if max_possible == 0 {
        return 0;
    }
    let rounded = round_half_up(100 * u64::from(sum), u64::from(max_possible));
    u8::try_from(rounded.min(100)).unwrap_or(100)
}

/// Unweighted mean, rounded half up. Empty input is 0.
pub(crate) fn mean_percentage<I>(scores: I) -> u8
where
    I: IntoIterator<Item = u8>,
{
    let (total, count) = scores
        .into_iter()
        .fold((0u64, 0u64), |(total, count), score| {
            (total + u64::from(score), count + 1)
        });
    if count == 0 {
        return 0;
    }
    u8::try_from(round_half_up(total, count).min(100)).unwrap_or(100)
}

fn round_half_up(numerator: u64, denominator: u64) -> u64 {
    (2 * numerator + denominator) / (2 * denominator)
}
