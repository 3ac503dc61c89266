//! Judge prompt construction
//!
//! The prompt is a fixed template with two slots. Query and answer text is
//! untrusted free-form input, so rendering is a literal fill: each slot is
//! located in the pristine template and replaced exactly once, and
//! substituted text is never rescanned. Braces or placeholder-looking text
//! inside an answer cannot corrupt the prompt.

/// Grading instructions sent to the judge model, with decision criteria and
/// two worked examples. The judge is asked to finish with an
/// `Answer Status` / `Reason` block.
pub const JUDGE_PROMPT_TEMPLATE: &str = r#"
Given a query and an answer provided by an AI agent, you now need to determine the answer_status of whether the well solved the query, i.e. whether the need of the query is satisfied. You need to output "Unsolved" or "Solved" and your reason. You must obey the following rules:

You should response "Solved" when:
    1. If the answer well provides the information needed by the query, then it is "Solved". The answer does not need to be perfect, and it only needs to make a genuine attempt to address the query.
    2. Consider only Completeness:
        - The answer attempts to address every part of the query, regardless of whether the information provided is factually correct or accurate, unless there is a severe factual error.
    3. For Multi-part Queries:
        - For queries with multiple parts, all parts must be addressed for the answer to be considered "Solved".
    4. Genuine Attempt:
        - The answer makes a genuine attempt to provide the requested information or perform the requested task for all parts of the query. This includes scenarios where the answer concludes that "nothing" is a reasonable response (e.g., when the requested information does not exist or is not available, or a possible answer of the query is nothing and the model answers nothing after reasonable attempts).

You should response "Unsolved" when:
    1. Refusal, Apology, or Non-engagement:
        - The answer includes a refusal or apology (e.g., "I'm sorry, I can't help with that").
        - The answer does not directly engage with or address the query in any way.
    2. Multi-part Queries:
        - If the query has multiple parts and at least one part is not well addressed.
    3. Severe Factual Error:
        - If the answer contains a severe factual error that significantly impacts the usefulness of the information provided.

Additional Guidelines:
    1. VERY IMPORTANT: DO NOT BE TOO HARSH. The model does not need to be perfect, and the answer does not need to be flawless. It only needs to make a genuine attempt to address the query.
    1. DO NOT evaluate factual accuracy or correctness of the information provided based on your knowledge. Assume that the information provided is accurate and focus solely on whether the answer attempts to address all parts of the query, unless there is a severe factual error that conficts common knowledge.
    2. Focus on Final Answer: Only the final answer is provided and should be considered, disregarding any processes that were used to generate the answer. You only need to judge whether the information need is satisfied.
    3. Answer Completion: The agent does not need to detail how it arrived at the answer, only that the answer itself is complete and attempts to address the query.

Here are some examples:

Query 1: I'm planning a movie night with my friends and we want to watch a horror film. Can you recommend some popular horror movies available on streaming platforms in the US? Also, provide the runtime and IMDb ratings for these movies.
Answer 1: Here are some popular horror movies available on streaming platforms in the US:

1. Knives Out
   - Runtime: 130 minutes
   - IMDb Rating: 7.9/10
   - Available on: Netflix, Prime Video, Hulu, Amazon Prime Video

2. Jumanji: The Next Level
   - Runtime: 110 minutes
   - IMDb Rating: 6.7/10
   - Available on: Hulu, Amazon Prime Video, Netflix

Please note that availability may vary depending on your location and streaming platform subscriptions. Enjoy your movie night!
Answer Status: Solved
Reason: The answer addressed all parts of subqueries by providing a list of popular horror movies available on streaming platforms in the US, along with their runtime and IMDb ratings. Whether the film is horror is a factual matter that does not to be checked.

Query 2: I'm a screenwriter looking for inspiration for my next project. Can you help me find a list of critically acclaimed movies available on streaming platforms in the US? Also, provide me with the streaming sources for the movie 'Citizen Kane' and the basic information about the cast, including their names and professions.
Answer 2: The movie 'Citizen Kane' is available on the following streaming platforms:
- HBO Max: [Watch on HBO Max](https://play.hbomax.com/feature/urn:hbo:feature:GXduU_gwwz-NvjAEAAAAC)
- Amazon Prime Video: [Watch on Amazon Prime Video](https://www.amazon.com/Citizen-Kane-Orson-Welles/dp/B000I9YLWG)
- AppleTV+: [Watch on AppleTV+](https://tv.apple.com/us/movie/citizen-kane/umc.cmc.21zj0v11gnqbbqrebieh0vpk7)
- Disney+: Available on Disney+
- Netflix: Available on Netflix
Answer Status: Unsolved
Reason: The answer only addressed the first and second part of the query by providing the streaming sources for the movie 'Citizen Kane' but did not provide information about the cast or a list of critically acclaimed movies available on streaming platforms in the US. The response was incomplete and did not fully address the query.

Query:
{query}
Answer:
{answer}

Now give your reason and answer status in the following format:

Answer Status
xxx (can only be "Solved" or "Unsolved")
Reason
xxx
"#;

/// Render the judge prompt for one query/answer pair.
///
/// Each slot is filled exactly once, left to right, from the pristine
/// template. Inserted text is appended without being rescanned, so a value
/// containing `{query}` or `{answer}` is carried verbatim.
pub fn render_judge_prompt(query: &str, answer: &str) -> String {
    let mut out =
        String::with_capacity(JUDGE_PROMPT_TEMPLATE.len() + query.len() + answer.len());
    let mut rest = JUDGE_PROMPT_TEMPLATE;

    for (slot, value) in [("{query}", query), ("{answer}", answer)] {
        match rest.split_once(slot) {
            Some((head, tail)) => {
                out.push_str(head);
                out.push_str(value);
                rest = tail;
            }
            None => break,
        }
    }

    out.push_str(rest);
    out
}
