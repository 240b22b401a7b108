//! Built-in EMV store-and-forward test script.

use crate::catalog::CategoryDefinition;

const STORE_AND_FORWARD: &[(&str, &[&str])] = &[
    (
        "Enabling Offline Mode",
        &[
            "Disconnect the terminal from Wi-Fi and mobile data.",
            "Attempt a network connection test and confirm failure is handled properly.",
            "Verify the terminal enters offline mode and displays an appropriate status message.",
        ],
    ),
    (
        "Processing Offline Transactions",
        &[
            "Insert a chip card and process a sale while offline.",
            "Swipe a magnetic stripe card and verify offline approval.",
            "Tap an NFC-enabled card and confirm the transaction is stored for later upload.",
            "Manually enter a card number and check if the transaction is accepted offline.",
        ],
    ),
    (
        "Transaction Approval and Receipt Printing",
        &[
            "Verify that offline transactions receive a locally approved response.",
            "Confirm that a receipt is printed with an \"Offline Approved\" message.",
            "Check if the receipt contains a disclaimer about the pending status of the transaction.",
        ],
    ),
    (
        "Transaction Storage and Limits",
        &[
            "Perform multiple offline transactions and ensure they are stored securely.",
            "Test reaching the offline transaction limit and verify the proper error message appears.",
            "Check that stored transactions include accurate timestamps and amounts.",
        ],
    ),
    (
        "Restoring Internet Connection",
        &[
            "Reconnect the terminal to Wi-Fi or mobile data.",
            "Verify that the terminal detects connectivity restoration automatically.",
            "Confirm that stored offline transactions begin uploading to the payment processor.",
            "Check that the terminal updates the status of pending transactions correctly.",
        ],
    ),
    (
        "Offline Transaction Upload Confirmation",
        &[
            "Verify that each transaction receives a final confirmation response from the server.",
            "Ensure that successful uploads are removed from the offline queue.",
            "Check that receipts for uploaded transactions can be reprinted from the transaction history.",
        ],
    ),
    (
        "Error Handling & Edge Cases",
        &[
            "Simulate a declined transaction while in offline mode and verify handling.",
            "Try to force an offline refund and confirm whether it is allowed or restricted.",
            "Interrupt the terminal's power during an offline transaction and check data recovery.",
            "Test a network outage during the upload process and ensure retries function correctly.",
        ],
    ),
    (
        "Final Review",
        &[
            "Document all test results and report any unexpected behavior.",
            "Verify that all offline transactions are successfully uploaded before concluding testing.",
        ],
    ),
];

pub(crate) fn store_and_forward() -> Vec<CategoryDefinition> {
    STORE_AND_FORWARD
        .iter()
        .map(|(name, tests)| CategoryDefinition::new(*name, tests.iter().copied()))
        .collect()
}
