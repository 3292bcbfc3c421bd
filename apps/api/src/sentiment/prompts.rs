// Prompt template for employee feedback analysis.
// Placeholders: {employee_feedback}, {format_instructions}

pub const FEEDBACK_PROMPT_TEMPLATE: &str = "You are an HR analyst.

Given the following employee feedback:
---
{employee_feedback}
---

Analyze it and determine the overall sentiment (positive, neutral or negative)
and how positive it is on a 0 to 1 scale. Identify the key themes it raises and
estimate the employee's attrition risk (high, medium or low). Finish with
concrete engagement recommendations for the employee's manager.

{format_instructions}";
